#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, TestLogger};
use typeahead::{Autocomplete, AutocompleteBuilder, Candidate, HasOnChange, Record};

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub fn currency(code: &str, name: &str) -> Candidate {
    Candidate::Record(Record::new().set("code", code).set("name", name))
}

pub fn currencies() -> Vec<Candidate> {
    vec![
        currency("USD", "US Dollar"),
        currency("EUR", "Euro"),
        currency("GBP", "British Pound"),
    ]
}

/// Collects every item passed to `on_change`.
#[derive(Clone, Default)]
pub struct Changes<T>(Rc<RefCell<Vec<T>>>);

impl<T: Clone + 'static> Changes<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn handler(&self) -> Box<dyn FnMut(&T)> {
        let sink = Rc::clone(&self.0);
        Box::new(move |item: &T| sink.borrow_mut().push(item.clone()))
    }

    pub fn all(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

pub fn currency_builder(
    changes: &Changes<Candidate>,
) -> AutocompleteBuilder<Candidate, HasOnChange<Candidate>> {
    Autocomplete::builder()
        .label("Currency")
        .options(currencies())
        .on_change(changes.handler())
}
