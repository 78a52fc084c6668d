use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::files::LabelIoError;

/// Mutable discovery phase of the class registry.
///
/// Ids are assigned as `len` at first sight and never reassigned or removed,
/// so they are stable only within the run that builds the set. Build the set
/// completely, then [`freeze`](Self::freeze) it before fanning out over
/// images; every later stage only reads.
#[derive(Clone, Debug, Default)]
pub struct LabelSetBuilder {
    names: Vec<String>,
    ids: HashMap<String, u32>,
}

impl LabelSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry from a configured class list, preserving its order.
    /// Discovery continues from there for classes the config did not name.
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for name in names {
            builder.class_id(&name.into());
        }
        builder
    }

    /// Id for `name`, assigning the next id on first sight.
    pub fn class_id(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        log::debug!("new class {name:?} -> id {id}");
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// End the discovery phase. The frozen set is the read-only registry
    /// shared by augmentation and everything downstream.
    pub fn freeze(self) -> LabelSet {
        LabelSet {
            names: self.names,
            ids: self.ids,
        }
    }
}

/// Frozen class registry: name ↔ id, id order = discovery order.
#[derive(Clone, Debug)]
pub struct LabelSet {
    names: Vec<String>,
    ids: HashMap<String, u32>,
}

impl LabelSet {
    pub fn id(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Class names in ascending id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Read `classes.txt`: one name per line, line index = class id.
    ///
    /// Existing entries are never reordered across runs, so reading the file
    /// back reconstructs exactly the ids it was written with.
    pub fn read_classes_file(path: &Path) -> Result<Self, LabelIoError> {
        let raw = fs::read_to_string(path)?;
        let builder = LabelSetBuilder::seeded(raw.lines().map(str::trim_end));
        Ok(builder.freeze())
    }

    /// Write `classes.txt`, newline-separated names in ascending id order.
    pub fn write_classes_file(&self, path: &Path) -> Result<(), LabelIoError> {
        let mut text = self.names.join("\n");
        text.push('\n');
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_discovery_order() {
        let mut builder = LabelSetBuilder::new();
        assert_eq!(builder.class_id("text_field"), 0);
        assert_eq!(builder.class_id("checkbox"), 1);
        assert_eq!(builder.class_id("signature"), 2);
        // Re-seeing a class never reassigns.
        assert_eq!(builder.class_id("checkbox"), 1);
        assert_eq!(builder.len(), 3);

        let set = builder.freeze();
        assert_eq!(set.id("signature"), Some(2));
        assert_eq!(set.name(0), Some("text_field"));
        assert_eq!(set.id("date_field"), None);
        assert_eq!(set.name(7), None);
    }

    #[test]
    fn seeding_preserves_the_configured_order() {
        let mut builder = LabelSetBuilder::seeded(["checkbox", "text_field"]);
        assert_eq!(builder.class_id("checkbox"), 0);
        // Discovery continues past the seed.
        assert_eq!(builder.class_id("dollar_amount"), 2);
    }

    #[test]
    fn classes_file_round_trips_ids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("classes.txt");

        let mut builder = LabelSetBuilder::new();
        for name in ["text_field", "checkbox", "date_field", "signature"] {
            builder.class_id(name);
        }
        let set = builder.freeze();
        set.write_classes_file(&path).expect("write");

        let back = LabelSet::read_classes_file(&path).expect("read");
        assert_eq!(back.len(), set.len());
        for (id, name) in set.names().iter().enumerate() {
            assert_eq!(back.id(name), Some(id as u32));
        }
    }

    #[test]
    fn classes_file_is_newline_separated_in_id_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("classes.txt");
        let set = LabelSetBuilder::seeded(["a", "b", "c"]).freeze();
        set.write_classes_file(&path).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "a\nb\nc\n");
    }
}
