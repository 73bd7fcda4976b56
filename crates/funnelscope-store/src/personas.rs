//! The persona library: a list under [`Category::Personas`] with ids assigned
//! on insert.

use chrono::Utc;
use funnelscope_core::{NewPersona, Persona};
use serde_json::Value;

use crate::error::StoreError;
use crate::records::{load_list, Category, Store};

/// # Errors
///
/// Returns [`StoreError`] if the persona list cannot be read.
pub fn load_personas<S: Store + ?Sized>(store: &S) -> Result<Vec<Persona>, StoreError> {
    load_list(store, Category::Personas)
}

/// Validate and add personas, assigning ids after the current highest id.
///
/// All personas are validated before anything is written, so one bad entry
/// leaves the library untouched.
///
/// # Errors
///
/// Returns [`StoreError::Rejected`] for a persona without a name or role, or
/// another [`StoreError`] if the library cannot be read or written.
pub fn add_personas<S: Store + ?Sized>(
    store: &S,
    new: Vec<NewPersona>,
) -> Result<Vec<Persona>, StoreError> {
    for persona in &new {
        persona.validate()?;
    }

    let mut personas = load_personas(store)?;
    let mut next_id = personas.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let now = Utc::now();

    let added: Vec<Persona> = new
        .into_iter()
        .map(|p| {
            let persona = p.into_persona(next_id, now);
            next_id += 1;
            persona
        })
        .collect();

    personas.extend(added.iter().cloned());
    write_personas(store, &personas)?;
    tracing::info!(added = added.len(), total = personas.len(), "personas saved");
    Ok(added)
}

/// Remove the persona with `id`. Returns `false` if no such persona exists.
///
/// # Errors
///
/// Returns [`StoreError`] if the library cannot be read or written.
pub fn delete_persona<S: Store + ?Sized>(store: &S, id: u32) -> Result<bool, StoreError> {
    let mut personas = load_personas(store)?;
    let before = personas.len();
    personas.retain(|p| p.id != id);
    if personas.len() == before {
        tracing::debug!(id, "persona not found");
        return Ok(false);
    }
    write_personas(store, &personas)?;
    tracing::info!(id, "persona deleted");
    Ok(true)
}

fn write_personas<S: Store + ?Sized>(store: &S, personas: &[Persona]) -> Result<(), StoreError> {
    let value: Value = serde_json::to_value(personas).map_err(|e| StoreError::Json {
        context: Category::Personas.to_string(),
        source: e,
    })?;
    store.write(Category::Personas, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn new_persona(name: &str) -> NewPersona {
        NewPersona {
            name: name.to_string(),
            role: "Marketing Manager".to_string(),
            ..NewPersona::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let added = add_personas(&store, vec![new_persona("A"), new_persona("B")]).unwrap();
        assert_eq!(added.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        let more = add_personas(&store, vec![new_persona("C")]).unwrap();
        assert_eq!(more[0].id, 3);
        assert_eq!(load_personas(&store).unwrap().len(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        add_personas(&store, vec![new_persona("A"), new_persona("B")]).unwrap();
        assert!(delete_persona(&store, 1).unwrap());

        let added = add_personas(&store, vec![new_persona("C")]).unwrap();
        assert_eq!(added[0].id, 3);
    }

    #[test]
    fn deleting_unknown_id_is_a_no_op() {
        let store = MemoryStore::new();
        add_personas(&store, vec![new_persona("A")]).unwrap();
        assert!(!delete_persona(&store, 42).unwrap());
        assert_eq!(load_personas(&store).unwrap().len(), 1);
    }

    #[test]
    fn invalid_persona_rejects_the_whole_batch() {
        let store = MemoryStore::new();
        let mut bad = new_persona("Nameless");
        bad.role = "  ".to_string();

        let err = add_personas(&store, vec![new_persona("A"), bad]).unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
        assert!(load_personas(&store).unwrap().is_empty());
    }
}
