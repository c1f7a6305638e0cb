use serde::{Deserialize, Serialize};

/// A persisted pessoa. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub hobbies: String,
}

/// A validated pessoa that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub address: String,
    pub hobbies: String,
}

/// Request body for create and update. `None` (absent or JSON null) means
/// "missing" on create and "unchanged" on update; `Some("")` is a real value.
/// Any `id` in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PersonPatch {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "endereco")]
    pub address: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
}

impl Person {
    pub fn from_new(id: i64, new: NewPerson) -> Self {
        Person {
            id,
            name: new.name,
            address: new.address,
            hobbies: new.hobbies,
        }
    }

    /// Overwrite each field the patch carries; leave the rest alone.
    pub fn apply(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(hobbies) = patch.hobbies {
            self.hobbies = hobbies;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Person {
        Person {
            id: 1,
            name: "Ana".into(),
            address: "Rua A".into(),
            hobbies: "Leitura".into(),
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut p = ana();
        p.apply(PersonPatch {
            address: Some("Rua B".into()),
            ..Default::default()
        });
        assert_eq!(p.name, "Ana");
        assert_eq!(p.address, "Rua B");
        assert_eq!(p.hobbies, "Leitura");
        assert_eq!(p.id, 1);
    }

    #[test]
    fn empty_string_overwrites() {
        let mut p = ana();
        p.apply(PersonPatch {
            hobbies: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(p.hobbies, "");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut p = ana();
        p.apply(PersonPatch::default());
        assert_eq!(p, ana());
    }

    #[test]
    fn patch_treats_null_and_absent_alike() {
        let patch: PersonPatch =
            serde_json::from_str(r#"{"name": null, "hobbies": "Xadrez", "id": 99}"#).unwrap();
        assert_eq!(
            patch,
            PersonPatch {
                name: None,
                address: None,
                hobbies: Some("Xadrez".into()),
            }
        );
    }

    #[test]
    fn patch_accepts_portuguese_field_names() {
        let patch: PersonPatch =
            serde_json::from_str(r#"{"nome": "Ana", "endereco": "Rua A"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Ana"));
        assert_eq!(patch.address.as_deref(), Some("Rua A"));
        assert_eq!(patch.hobbies, None);
    }
}
