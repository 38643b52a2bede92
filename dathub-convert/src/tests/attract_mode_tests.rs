use super::*;

const X: &str = "XXXXXX";

fn x() -> Option<String> {
    Some(X.to_string())
}

fn full_row() -> Row {
    Row {
        name: x(),
        title: x(),
        emulator: x(),
        clone_of: x(),
        year: x(),
        manufacturer: x(),
        category: x(),
        players: x(),
        rotation: x(),
        control: x(),
        status: x(),
        display_count: x(),
        display_type: x(),
        alt_romname: x(),
        alt_title: x(),
        extra: x(),
        buttons: x(),
        favorite: x(),
        tags: x(),
        played_count: x(),
        played_time: x(),
        file_is_available: x(),
    }
}

#[test]
fn test_full_row_round_trip() {
    let file = AttractModeFile {
        header: vec!["#Name".to_string(), "Title".to_string()],
        rows: vec![full_row(), full_row()],
    };

    let back = AttractModeFile::from_hub(&file.to_hub(), ());
    assert_eq!(back, file);
}

#[test]
fn test_row_gets_placeholder_rom() {
    let file = AttractModeFile {
        header: Vec::new(),
        rows: vec![full_row()],
    };

    let hub = file.to_hub();
    assert!(hub.header().is_none());
    let machines = hub.machines();
    let roms = machines[0].read_all(machine::ROM, EntityKind::Rom);
    assert_eq!(roms.len(), 1);
    assert_eq!(roms[0].read_str(rom::NAME), Some("-"));
    assert_eq!(machines[0].read_str(machine::DESCRIPTION), Some(X));
}

#[test]
fn test_category_list_is_joined() {
    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::NAME, "pacman");
    game.set(
        machine::CATEGORY,
        vec!["Maze".to_string(), "Arcade".to_string()],
    );
    let mut item = Entity::new(EntityKind::Rom);
    item.set(rom::NAME, "pacman.6e");
    game.set(machine::ROM, vec![item]);

    let back = AttractModeFile::from_hub(&MetadataFile::new(None, vec![game]), ());
    assert_eq!(back.rows[0].category.as_deref(), Some("Maze, Arcade"));
}

#[test]
fn test_machine_without_roms_writes_no_rows() {
    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::NAME, "empty");
    let back = AttractModeFile::from_hub(&MetadataFile::new(None, vec![game]), ());
    assert!(back.rows.is_empty());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<AttractModeFile>(None).is_none());
    assert!(crate::from_hub::<AttractModeFile>(None, ()).is_none());
}
