use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        if let Some(value) = self.store.get(name) {
            return Some(Rc::clone(value));
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }
    pub fn set(&mut self, name: &str, value: Rc<Object>) -> Rc<Object> {
        self.store.insert(name.to_string(), Rc::clone(&value));
        value
    }
    pub fn delete(&mut self, name: &str) {
        self.store.remove(name);
    }
    // Copies the frame chain as it stands; the values themselves stay shared.
    pub fn snapshot(&self) -> Environment {
        Environment {
            store: self.store.clone(),
            outer: self
                .outer
                .as_ref()
                .map(|outer| Rc::new(RefCell::new(outer.borrow().snapshot()))),
        }
    }
}

// Function objects hold their defining frame, so printing values must not
// descend back into them.
impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.store.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosed", &self.outer.is_some())
            .finish()
    }
}
