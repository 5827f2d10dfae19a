use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::io::{
    BufReader,
    Read
};

use serde::Deserialize;
use tracing::debug;

use super::managererror::ManagerError;

/// Parses one registered object from its JSON entry; receives the entry's name.
pub type JsonParser<V> = fn(&str, serde_json::Value) -> Result<V, ManagerError>;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>>;

    fn map_mut(&self) -> RefMut<'_, HashMap<String, V>>;

    /// Parses one entry into its name and value without registering it.
    fn parse_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn insert_parsed(&self, entries: Vec<(String, V)>) {
        let mut map = self.map_mut();
        for (name, v) in entries {
            debug!(name = name.as_str(), "registered method");
            map.insert(name, v);
        }
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let entry = self.parse_obj_from_json(json_value)?;
        self.insert_parsed(vec![entry]);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        let elem = map.get(name).cloned();
        elem.ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// Registered names, sorted.
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn parse_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<Vec<(String, V)>, ManagerError> {
        json_vec
            .iter()
            .map(|j| self.parse_obj_from_json(j.clone()))
            .collect()
    }

    /// All-or-nothing: a bad entry leaves the registry untouched.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let entries = self.parse_obj_from_json_vec(json_vec)?;
        self.insert_parsed(entries);
        Ok(())
    }

    /// Accepts either a single entry or an array of entries.
    fn from_reader<R>(&self, reader: R) -> Result<(), ManagerError>
        where R: Read {
        let reader = BufReader::new(reader);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: JsonParser<V>
}


impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: JsonParser<V>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn insert(&self, name: &str, value: V) {
        self.map_mut().insert(name.to_owned(), value);
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

impl<V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    fn map_mut(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn parse_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        if !json_value.is_object() {
            return Err(ManagerError::json_invalid_type(
                serde::de::Unexpected::Other("non-object entry"),
                &"an object with a \"name\" field"
            ));
        }
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(&named_object.name, json_value)?;
        Ok((named_object.name, v))
    }
}
