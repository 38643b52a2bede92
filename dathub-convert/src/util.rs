use dathub_core::Entity;

/// `Some(value)` unless it equals the type's default (all fields unset).
pub(crate) fn non_default<T: Default + PartialEq>(value: T) -> Option<T> {
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// `Some(entity)` unless no key was written into it.
pub(crate) fn non_empty(entity: Entity) -> Option<Entity> {
    if entity.is_empty() {
        None
    } else {
        Some(entity)
    }
}

/// Normalize a yes/no indicator: `"yes"` or `"1"` (any case) become `"yes"`,
/// everything else becomes `"no"`.
pub(crate) fn yes_no(value: &str) -> &'static str {
    let value = value.trim();
    if value.eq_ignore_ascii_case("yes") || value == "1" {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dathub_core::EntityKind;

    #[test]
    fn yes_no_accepts_yes_and_one() {
        assert_eq!(yes_no("yes"), "yes");
        assert_eq!(yes_no("YES"), "yes");
        assert_eq!(yes_no("1"), "yes");
        assert_eq!(yes_no(" 1 "), "yes");
    }

    #[test]
    fn yes_no_maps_everything_else_to_no() {
        assert_eq!(yes_no("no"), "no");
        assert_eq!(yes_no("0"), "no");
        assert_eq!(yes_no(""), "no");
        assert_eq!(yes_no("XXXXXX"), "no");
    }

    #[test]
    fn yes_no_is_idempotent() {
        for input in ["yes", "1", "no", "0", "XXXXXX", "Yes"] {
            let once = yes_no(input);
            assert_eq!(yes_no(once), once, "not stable for {input:?}");
        }
    }

    #[test]
    fn non_default_drops_empty_structs() {
        assert_eq!(non_default(String::new()), None);
        assert_eq!(non_default("x".to_string()), Some("x".to_string()));
    }

    #[test]
    fn non_empty_drops_empty_entities() {
        assert!(non_empty(Entity::new(EntityKind::Driver)).is_none());
        let mut driver = Entity::new(EntityKind::Driver);
        driver.set("status", "good");
        assert!(non_empty(driver).is_some());
    }
}
