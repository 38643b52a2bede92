//! MAME `-listxml` adapter.
//!
//! Listxml carries the richest machine description of any format, so most
//! machine descriptor kinds in the hub exist because of it. The machine
//! helpers are `pub(crate)` so the M1 adapter, which embeds the same
//! machine shape, can reuse them.

use dathub_core::keys::{
    adjuster, analog, bios_set, chip, condition, conf_location, conf_setting, configuration,
    control, device, device_ref, dip_location, dip_switch, dip_value, disk, display, driver,
    extension, feature, header, input, instance, machine, port, ram_option, rom, sample, slot,
    slot_option, software_list, sound, video,
};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::listxml::{
    Adjuster, Analog, BiosSet, Chip, ConfLocation, ConfSetting, Condition, Configuration, Control,
    Device, DeviceRef, DipLocation, DipSwitch, DipValue, Disk, Display, Driver, Extension, Feature,
    Input, Instance, Machine, Mame, Port, RamOption, Rom, Sample, Slot, SlotOption, SoftwareList,
    Sound, Video,
};

use crate::HubConvert;
use crate::util::non_empty;

impl HubConvert for Mame {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_opt(header::BUILD, self.build.clone());
        hub_header.set_opt(header::DEBUG, self.debug.clone());
        hub_header.set_opt(header::MAME_CONFIG, self.mame_config.clone());

        let machines = self.machines.iter().map(machine_to_hub).collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        let hub_header = hub.header();
        Mame {
            build: hub_header.and_then(|h| h.read_string(header::BUILD)),
            debug: hub_header.and_then(|h| h.read_string(header::DEBUG)),
            mame_config: hub_header.and_then(|h| h.read_string(header::MAME_CONFIG)),
            machines: hub.machines().into_iter().map(machine_from_hub).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Listxml -> hub
// ---------------------------------------------------------------------------

pub(crate) fn machine_to_hub(item: &Machine) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, item.name.clone());
    entity.set_opt(machine::SOURCE_FILE, item.source_file.clone());
    entity.set_opt(machine::IS_BIOS, item.is_bios.clone());
    entity.set_opt(machine::IS_DEVICE, item.is_device.clone());
    entity.set_opt(machine::IS_MECHANICAL, item.is_mechanical.clone());
    entity.set_opt(machine::RUNNABLE, item.runnable.clone());
    entity.set_opt(machine::CLONE_OF, item.clone_of.clone());
    entity.set_opt(machine::ROM_OF, item.rom_of.clone());
    entity.set_opt(machine::SAMPLE_OF, item.sample_of.clone());
    entity.set_opt(machine::DESCRIPTION, item.description.clone());
    entity.set_opt(machine::YEAR, item.year.clone());
    entity.set_opt(machine::MANUFACTURER, item.manufacturer.clone());
    entity.set_opt(machine::HISTORY, item.history.clone());

    entity.set_entities(machine::BIOS_SET, item.bios_set.iter().map(bios_set_to_hub).collect());
    entity.set_entities(machine::ROM, item.rom.iter().map(rom_to_hub).collect());
    entity.set_entities(machine::DISK, item.disk.iter().map(disk_to_hub).collect());
    entity.set_entities(
        machine::DEVICE_REF,
        item.device_ref.iter().map(device_ref_to_hub).collect(),
    );
    entity.set_entities(machine::SAMPLE, item.sample.iter().map(sample_to_hub).collect());
    entity.set_entities(machine::CHIP, item.chip.iter().map(chip_to_hub).collect());
    entity.set_entities(machine::DISPLAY, item.display.iter().map(display_to_hub).collect());
    entity.set_entities(machine::VIDEO, item.video.iter().map(video_to_hub).collect());
    entity.set_entity(machine::SOUND, item.sound.as_ref().map(sound_to_hub));
    entity.set_entity(machine::INPUT, item.input.as_ref().map(input_to_hub));
    entity.set_entities(
        machine::DIP_SWITCH,
        item.dip_switch.iter().map(dip_switch_to_hub).collect(),
    );
    entity.set_entities(
        machine::CONFIGURATION,
        item.configuration.iter().map(configuration_to_hub).collect(),
    );
    entity.set_entities(machine::PORT, item.port.iter().map(port_to_hub).collect());
    entity.set_entities(machine::ADJUSTER, item.adjuster.iter().map(adjuster_to_hub).collect());
    entity.set_entity(machine::DRIVER, item.driver.as_ref().map(driver_to_hub));
    entity.set_entities(machine::FEATURE, item.feature.iter().map(feature_to_hub).collect());
    entity.set_entities(machine::DEVICE, item.device.iter().map(device_to_hub).collect());
    entity.set_entities(machine::SLOT, item.slot.iter().map(slot_to_hub).collect());
    entity.set_entities(
        machine::SOFTWARE_LIST,
        item.software_list.iter().map(software_list_to_hub).collect(),
    );
    entity.set_entities(
        machine::RAM_OPTION,
        item.ram_option.iter().map(ram_option_to_hub).collect(),
    );
    entity
}

fn bios_set_to_hub(item: &BiosSet) -> Entity {
    let mut entity = Entity::new(EntityKind::BiosSet);
    entity.set_opt(bios_set::NAME, item.name.clone());
    entity.set_opt(bios_set::DESCRIPTION, item.description.clone());
    entity.set_opt(bios_set::DEFAULT, item.default.clone());
    entity
}

fn rom_to_hub(item: &Rom) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::NAME, item.name.clone());
    entity.set_opt(rom::BIOS, item.bios.clone());
    entity.set_opt(rom::SIZE, item.size.clone());
    entity.set_opt(rom::CRC, item.crc.clone());
    entity.set_opt(rom::SHA1, item.sha1.clone());
    entity.set_opt(rom::MERGE, item.merge.clone());
    entity.set_opt(rom::REGION, item.region.clone());
    entity.set_opt(rom::OFFSET, item.offset.clone());
    entity.set_opt(rom::STATUS, item.status.clone());
    entity.set_opt(rom::OPTIONAL, item.optional.clone());
    entity.set_opt(rom::DISPOSE, item.dispose.clone());
    entity
}

fn disk_to_hub(item: &Disk) -> Entity {
    let mut entity = Entity::new(EntityKind::Disk);
    entity.set_opt(disk::NAME, item.name.clone());
    entity.set_opt(disk::MD5, item.md5.clone());
    entity.set_opt(disk::SHA1, item.sha1.clone());
    entity.set_opt(disk::MERGE, item.merge.clone());
    entity.set_opt(disk::REGION, item.region.clone());
    entity.set_opt(disk::INDEX, item.index.clone());
    entity.set_opt(disk::WRITABLE, item.writable.clone());
    entity.set_opt(disk::STATUS, item.status.clone());
    entity.set_opt(disk::OPTIONAL, item.optional.clone());
    entity
}

fn device_ref_to_hub(item: &DeviceRef) -> Entity {
    let mut entity = Entity::new(EntityKind::DeviceRef);
    entity.set_opt(device_ref::NAME, item.name.clone());
    entity
}

fn sample_to_hub(item: &Sample) -> Entity {
    let mut entity = Entity::new(EntityKind::Sample);
    entity.set_opt(sample::NAME, item.name.clone());
    entity
}

fn chip_to_hub(item: &Chip) -> Entity {
    let mut entity = Entity::new(EntityKind::Chip);
    entity.set_opt(chip::NAME, item.name.clone());
    entity.set_opt(chip::TAG, item.tag.clone());
    entity.set_opt(chip::TYPE, item.r#type.clone());
    entity.set_opt(chip::SOUND_ONLY, item.sound_only.clone());
    entity.set_opt(chip::CLOCK, item.clock.clone());
    entity
}

fn display_to_hub(item: &Display) -> Entity {
    let mut entity = Entity::new(EntityKind::Display);
    entity.set_opt(display::TAG, item.tag.clone());
    entity.set_opt(display::TYPE, item.r#type.clone());
    entity.set_opt(display::ROTATE, item.rotate.clone());
    entity.set_opt(display::FLIP_X, item.flip_x.clone());
    entity.set_opt(display::WIDTH, item.width.clone());
    entity.set_opt(display::HEIGHT, item.height.clone());
    entity.set_opt(display::REFRESH, item.refresh.clone());
    entity.set_opt(display::PIX_CLOCK, item.pix_clock.clone());
    entity.set_opt(display::H_TOTAL, item.h_total.clone());
    entity.set_opt(display::HB_END, item.hb_end.clone());
    entity.set_opt(display::HB_START, item.hb_start.clone());
    entity.set_opt(display::V_TOTAL, item.v_total.clone());
    entity.set_opt(display::VB_END, item.vb_end.clone());
    entity.set_opt(display::VB_START, item.vb_start.clone());
    entity
}

fn video_to_hub(item: &Video) -> Entity {
    let mut entity = Entity::new(EntityKind::Video);
    entity.set_opt(video::SCREEN, item.screen.clone());
    entity.set_opt(video::ORIENTATION, item.orientation.clone());
    entity.set_opt(video::WIDTH, item.width.clone());
    entity.set_opt(video::HEIGHT, item.height.clone());
    entity.set_opt(video::ASPECT_X, item.aspect_x.clone());
    entity.set_opt(video::ASPECT_Y, item.aspect_y.clone());
    entity.set_opt(video::REFRESH, item.refresh.clone());
    entity
}

fn sound_to_hub(item: &Sound) -> Entity {
    let mut entity = Entity::new(EntityKind::Sound);
    entity.set_opt(sound::CHANNELS, item.channels.clone());
    entity
}

fn input_to_hub(item: &Input) -> Entity {
    let mut entity = Entity::new(EntityKind::Input);
    entity.set_opt(input::SERVICE, item.service.clone());
    entity.set_opt(input::TILT, item.tilt.clone());
    entity.set_opt(input::PLAYERS, item.players.clone());
    entity.set_opt(input::BUTTONS, item.buttons.clone());
    entity.set_opt(input::COINS, item.coins.clone());
    entity.set_entities(input::CONTROL, item.control.iter().map(control_to_hub).collect());
    entity
}

fn control_to_hub(item: &Control) -> Entity {
    let mut entity = Entity::new(EntityKind::Control);
    entity.set_opt(control::TYPE, item.r#type.clone());
    entity.set_opt(control::PLAYER, item.player.clone());
    entity.set_opt(control::BUTTONS, item.buttons.clone());
    entity.set_opt(control::REQ_BUTTONS, item.req_buttons.clone());
    entity.set_opt(control::MINIMUM, item.minimum.clone());
    entity.set_opt(control::MAXIMUM, item.maximum.clone());
    entity.set_opt(control::SENSITIVITY, item.sensitivity.clone());
    entity.set_opt(control::KEY_DELTA, item.key_delta.clone());
    entity.set_opt(control::REVERSE, item.reverse.clone());
    entity.set_opt(control::WAYS, item.ways.clone());
    entity.set_opt(control::WAYS2, item.ways2.clone());
    entity.set_opt(control::WAYS3, item.ways3.clone());
    entity
}

fn condition_to_hub(item: &Condition) -> Entity {
    let mut entity = Entity::new(EntityKind::Condition);
    entity.set_opt(condition::TAG, item.tag.clone());
    entity.set_opt(condition::MASK, item.mask.clone());
    entity.set_opt(condition::RELATION, item.relation.clone());
    entity.set_opt(condition::VALUE, item.value.clone());
    entity
}

fn dip_switch_to_hub(item: &DipSwitch) -> Entity {
    let mut entity = Entity::new(EntityKind::DipSwitch);
    entity.set_opt(dip_switch::NAME, item.name.clone());
    entity.set_opt(dip_switch::TAG, item.tag.clone());
    entity.set_opt(dip_switch::MASK, item.mask.clone());
    entity.set_entity(
        dip_switch::CONDITION,
        item.condition.as_ref().map(condition_to_hub),
    );
    entity.set_entities(
        dip_switch::DIP_LOCATION,
        item.dip_location.iter().map(dip_location_to_hub).collect(),
    );
    entity.set_entities(
        dip_switch::DIP_VALUE,
        item.dip_value.iter().map(dip_value_to_hub).collect(),
    );
    entity
}

fn dip_location_to_hub(item: &DipLocation) -> Entity {
    let mut entity = Entity::new(EntityKind::DipLocation);
    entity.set_opt(dip_location::NAME, item.name.clone());
    entity.set_opt(dip_location::NUMBER, item.number.clone());
    entity.set_opt(dip_location::INVERTED, item.inverted.clone());
    entity
}

fn dip_value_to_hub(item: &DipValue) -> Entity {
    let mut entity = Entity::new(EntityKind::DipValue);
    entity.set_opt(dip_value::NAME, item.name.clone());
    entity.set_opt(dip_value::VALUE, item.value.clone());
    entity.set_opt(dip_value::DEFAULT, item.default.clone());
    entity.set_entity(
        dip_value::CONDITION,
        item.condition.as_ref().map(condition_to_hub),
    );
    entity
}

fn configuration_to_hub(item: &Configuration) -> Entity {
    let mut entity = Entity::new(EntityKind::Configuration);
    entity.set_opt(configuration::NAME, item.name.clone());
    entity.set_opt(configuration::TAG, item.tag.clone());
    entity.set_opt(configuration::MASK, item.mask.clone());
    entity.set_entity(
        configuration::CONDITION,
        item.condition.as_ref().map(condition_to_hub),
    );
    entity.set_entities(
        configuration::CONF_LOCATION,
        item.conf_location.iter().map(conf_location_to_hub).collect(),
    );
    entity.set_entities(
        configuration::CONF_SETTING,
        item.conf_setting.iter().map(conf_setting_to_hub).collect(),
    );
    entity
}

fn conf_location_to_hub(item: &ConfLocation) -> Entity {
    let mut entity = Entity::new(EntityKind::ConfLocation);
    entity.set_opt(conf_location::NAME, item.name.clone());
    entity.set_opt(conf_location::NUMBER, item.number.clone());
    entity.set_opt(conf_location::INVERTED, item.inverted.clone());
    entity
}

fn conf_setting_to_hub(item: &ConfSetting) -> Entity {
    let mut entity = Entity::new(EntityKind::ConfSetting);
    entity.set_opt(conf_setting::NAME, item.name.clone());
    entity.set_opt(conf_setting::VALUE, item.value.clone());
    entity.set_opt(conf_setting::DEFAULT, item.default.clone());
    entity.set_entity(
        conf_setting::CONDITION,
        item.condition.as_ref().map(condition_to_hub),
    );
    entity
}

fn port_to_hub(item: &Port) -> Entity {
    let mut entity = Entity::new(EntityKind::Port);
    entity.set_opt(port::TAG, item.tag.clone());
    entity.set_entities(
        port::ANALOG,
        item.analog
            .iter()
            .map(|a| {
                let mut analog_entity = Entity::new(EntityKind::Analog);
                analog_entity.set_opt(analog::MASK, a.mask.clone());
                analog_entity
            })
            .collect(),
    );
    entity
}

fn adjuster_to_hub(item: &Adjuster) -> Entity {
    let mut entity = Entity::new(EntityKind::Adjuster);
    entity.set_opt(adjuster::NAME, item.name.clone());
    entity.set_opt(adjuster::DEFAULT, item.default.clone());
    entity.set_entity(
        adjuster::CONDITION,
        item.condition.as_ref().map(condition_to_hub),
    );
    entity
}

fn driver_to_hub(item: &Driver) -> Entity {
    let mut entity = Entity::new(EntityKind::Driver);
    entity.set_opt(driver::STATUS, item.status.clone());
    entity.set_opt(driver::COLOR, item.color.clone());
    entity.set_opt(driver::SOUND, item.sound.clone());
    entity.set_opt(driver::PALETTE_SIZE, item.palette_size.clone());
    entity.set_opt(driver::EMULATION, item.emulation.clone());
    entity.set_opt(driver::COCKTAIL, item.cocktail.clone());
    entity.set_opt(driver::SAVE_STATE, item.save_state.clone());
    entity.set_opt(driver::REQUIRES_ARTWORK, item.requires_artwork.clone());
    entity.set_opt(driver::UNOFFICIAL, item.unofficial.clone());
    entity.set_opt(driver::NO_SOUND_HARDWARE, item.no_sound_hardware.clone());
    entity.set_opt(driver::INCOMPLETE, item.incomplete.clone());
    entity
}

fn feature_to_hub(item: &Feature) -> Entity {
    let mut entity = Entity::new(EntityKind::Feature);
    entity.set_opt(feature::TYPE, item.r#type.clone());
    entity.set_opt(feature::STATUS, item.status.clone());
    entity.set_opt(feature::OVERALL, item.overall.clone());
    entity
}

fn device_to_hub(item: &Device) -> Entity {
    let mut entity = Entity::new(EntityKind::Device);
    entity.set_opt(device::TYPE, item.r#type.clone());
    entity.set_opt(device::TAG, item.tag.clone());
    entity.set_opt(device::FIXED_IMAGE, item.fixed_image.clone());
    entity.set_opt(device::MANDATORY, item.mandatory.clone());
    entity.set_opt(device::INTERFACE, item.interface.clone());
    entity.set_entity(
        device::INSTANCE,
        item.instance.as_ref().map(|i| {
            let mut instance_entity = Entity::new(EntityKind::Instance);
            instance_entity.set_opt(instance::NAME, i.name.clone());
            instance_entity.set_opt(instance::BRIEF_NAME, i.brief_name.clone());
            instance_entity
        }),
    );
    entity.set_entities(
        device::EXTENSION,
        item.extension
            .iter()
            .map(|e| {
                let mut extension_entity = Entity::new(EntityKind::Extension);
                extension_entity.set_opt(extension::NAME, e.name.clone());
                extension_entity
            })
            .collect(),
    );
    entity
}

fn slot_to_hub(item: &Slot) -> Entity {
    let mut entity = Entity::new(EntityKind::Slot);
    entity.set_opt(slot::NAME, item.name.clone());
    entity.set_entities(
        slot::SLOT_OPTION,
        item.slot_option
            .iter()
            .map(|o| {
                let mut option_entity = Entity::new(EntityKind::SlotOption);
                option_entity.set_opt(slot_option::NAME, o.name.clone());
                option_entity.set_opt(slot_option::DEV_NAME, o.dev_name.clone());
                option_entity.set_opt(slot_option::DEFAULT, o.default.clone());
                option_entity
            })
            .collect(),
    );
    entity
}

fn software_list_to_hub(item: &SoftwareList) -> Entity {
    let mut entity = Entity::new(EntityKind::SoftwareList);
    entity.set_opt(software_list::TAG, item.tag.clone());
    entity.set_opt(software_list::NAME, item.name.clone());
    entity.set_opt(software_list::STATUS, item.status.clone());
    entity.set_opt(software_list::FILTER, item.filter.clone());
    entity
}

fn ram_option_to_hub(item: &RamOption) -> Entity {
    let mut entity = Entity::new(EntityKind::RamOption);
    entity.set_opt(ram_option::NAME, item.name.clone());
    entity.set_opt(ram_option::DEFAULT, item.default.clone());
    entity.set_opt(ram_option::CONTENT, item.content.clone());
    entity
}

// ---------------------------------------------------------------------------
// hub -> Listxml
// ---------------------------------------------------------------------------

/// Map every entity of `kind` under `key` through `f`, in order.
fn collect_all<T>(entity: &Entity, key: &str, kind: EntityKind, f: fn(&Entity) -> T) -> Vec<T> {
    entity.read_all(key, kind).into_iter().map(f).collect()
}

pub(crate) fn machine_from_hub(entity: &Entity) -> Machine {
    Machine {
        name: entity.read_string(machine::NAME),
        source_file: entity.read_string(machine::SOURCE_FILE),
        is_bios: entity.read_string(machine::IS_BIOS),
        is_device: entity.read_string(machine::IS_DEVICE),
        is_mechanical: entity.read_string(machine::IS_MECHANICAL),
        runnable: entity.read_string(machine::RUNNABLE),
        clone_of: entity.read_string(machine::CLONE_OF),
        rom_of: entity.read_string(machine::ROM_OF),
        sample_of: entity.read_string(machine::SAMPLE_OF),
        description: entity.read_string(machine::DESCRIPTION),
        year: entity.read_string(machine::YEAR),
        manufacturer: entity.read_string(machine::MANUFACTURER),
        history: entity.read_string(machine::HISTORY),
        bios_set: collect_all(entity, machine::BIOS_SET, EntityKind::BiosSet, bios_set_from_hub),
        rom: collect_all(entity, machine::ROM, EntityKind::Rom, rom_from_hub),
        disk: collect_all(entity, machine::DISK, EntityKind::Disk, disk_from_hub),
        device_ref: collect_all(entity, machine::DEVICE_REF, EntityKind::DeviceRef, |e| {
            DeviceRef {
                name: e.read_string(device_ref::NAME),
            }
        }),
        sample: collect_all(entity, machine::SAMPLE, EntityKind::Sample, |e| Sample {
            name: e.read_string(sample::NAME),
        }),
        chip: collect_all(entity, machine::CHIP, EntityKind::Chip, chip_from_hub),
        display: collect_all(entity, machine::DISPLAY, EntityKind::Display, display_from_hub),
        video: collect_all(entity, machine::VIDEO, EntityKind::Video, video_from_hub),
        sound: entity
            .read(machine::SOUND, EntityKind::Sound)
            .map(|e| Sound {
                channels: e.read_string(sound::CHANNELS),
            }),
        input: entity
            .read(machine::INPUT, EntityKind::Input)
            .map(input_from_hub),
        dip_switch: collect_all(
            entity,
            machine::DIP_SWITCH,
            EntityKind::DipSwitch,
            dip_switch_from_hub,
        ),
        configuration: collect_all(
            entity,
            machine::CONFIGURATION,
            EntityKind::Configuration,
            configuration_from_hub,
        ),
        port: collect_all(entity, machine::PORT, EntityKind::Port, port_from_hub),
        adjuster: collect_all(entity, machine::ADJUSTER, EntityKind::Adjuster, adjuster_from_hub),
        driver: entity
            .read(machine::DRIVER, EntityKind::Driver)
            .map(driver_from_hub),
        feature: collect_all(entity, machine::FEATURE, EntityKind::Feature, feature_from_hub),
        device: collect_all(entity, machine::DEVICE, EntityKind::Device, device_from_hub),
        slot: collect_all(entity, machine::SLOT, EntityKind::Slot, slot_from_hub),
        software_list: collect_all(
            entity,
            machine::SOFTWARE_LIST,
            EntityKind::SoftwareList,
            software_list_from_hub,
        ),
        ram_option: collect_all(
            entity,
            machine::RAM_OPTION,
            EntityKind::RamOption,
            ram_option_from_hub,
        ),
    }
}

fn bios_set_from_hub(entity: &Entity) -> BiosSet {
    BiosSet {
        name: entity.read_string(bios_set::NAME),
        description: entity.read_string(bios_set::DESCRIPTION),
        default: entity.read_string(bios_set::DEFAULT),
    }
}

fn rom_from_hub(entity: &Entity) -> Rom {
    Rom {
        name: entity.read_string(rom::NAME),
        bios: entity.read_string(rom::BIOS),
        size: entity.read_string(rom::SIZE),
        crc: entity.read_string(rom::CRC),
        sha1: entity.read_string(rom::SHA1),
        merge: entity.read_string(rom::MERGE),
        region: entity.read_string(rom::REGION),
        offset: entity.read_string(rom::OFFSET),
        status: entity.read_string(rom::STATUS),
        optional: entity.read_string(rom::OPTIONAL),
        dispose: entity.read_string(rom::DISPOSE),
    }
}

fn disk_from_hub(entity: &Entity) -> Disk {
    Disk {
        name: entity.read_string(disk::NAME),
        md5: entity.read_string(disk::MD5),
        sha1: entity.read_string(disk::SHA1),
        merge: entity.read_string(disk::MERGE),
        region: entity.read_string(disk::REGION),
        index: entity.read_string(disk::INDEX),
        writable: entity.read_string(disk::WRITABLE),
        status: entity.read_string(disk::STATUS),
        optional: entity.read_string(disk::OPTIONAL),
    }
}

fn chip_from_hub(entity: &Entity) -> Chip {
    Chip {
        name: entity.read_string(chip::NAME),
        tag: entity.read_string(chip::TAG),
        r#type: entity.read_string(chip::TYPE),
        sound_only: entity.read_string(chip::SOUND_ONLY),
        clock: entity.read_string(chip::CLOCK),
    }
}

fn display_from_hub(entity: &Entity) -> Display {
    Display {
        tag: entity.read_string(display::TAG),
        r#type: entity.read_string(display::TYPE),
        rotate: entity.read_string(display::ROTATE),
        flip_x: entity.read_string(display::FLIP_X),
        width: entity.read_string(display::WIDTH),
        height: entity.read_string(display::HEIGHT),
        refresh: entity.read_string(display::REFRESH),
        pix_clock: entity.read_string(display::PIX_CLOCK),
        h_total: entity.read_string(display::H_TOTAL),
        hb_end: entity.read_string(display::HB_END),
        hb_start: entity.read_string(display::HB_START),
        v_total: entity.read_string(display::V_TOTAL),
        vb_end: entity.read_string(display::VB_END),
        vb_start: entity.read_string(display::VB_START),
    }
}

fn video_from_hub(entity: &Entity) -> Video {
    Video {
        screen: entity.read_string(video::SCREEN),
        orientation: entity.read_string(video::ORIENTATION),
        width: entity.read_string(video::WIDTH),
        height: entity.read_string(video::HEIGHT),
        aspect_x: entity.read_string(video::ASPECT_X),
        aspect_y: entity.read_string(video::ASPECT_Y),
        refresh: entity.read_string(video::REFRESH),
    }
}

fn input_from_hub(entity: &Entity) -> Input {
    Input {
        service: entity.read_string(input::SERVICE),
        tilt: entity.read_string(input::TILT),
        players: entity.read_string(input::PLAYERS),
        buttons: entity.read_string(input::BUTTONS),
        coins: entity.read_string(input::COINS),
        // A ClrMamePro scalar control description yields no controls.
        control: collect_all(entity, input::CONTROL, EntityKind::Control, control_from_hub),
    }
}

fn control_from_hub(entity: &Entity) -> Control {
    Control {
        r#type: entity.read_string(control::TYPE),
        player: entity.read_string(control::PLAYER),
        buttons: entity.read_string(control::BUTTONS),
        req_buttons: entity.read_string(control::REQ_BUTTONS),
        minimum: entity.read_string(control::MINIMUM),
        maximum: entity.read_string(control::MAXIMUM),
        sensitivity: entity.read_string(control::SENSITIVITY),
        key_delta: entity.read_string(control::KEY_DELTA),
        reverse: entity.read_string(control::REVERSE),
        ways: entity.read_string(control::WAYS),
        ways2: entity.read_string(control::WAYS2),
        ways3: entity.read_string(control::WAYS3),
    }
}

fn condition_from_hub(entity: &Entity, key: &str) -> Option<Condition> {
    entity
        .read(key, EntityKind::Condition)
        .map(|c| Condition {
            tag: c.read_string(condition::TAG),
            mask: c.read_string(condition::MASK),
            relation: c.read_string(condition::RELATION),
            value: c.read_string(condition::VALUE),
        })
}

fn dip_switch_from_hub(entity: &Entity) -> DipSwitch {
    DipSwitch {
        name: entity.read_string(dip_switch::NAME),
        tag: entity.read_string(dip_switch::TAG),
        mask: entity.read_string(dip_switch::MASK),
        condition: condition_from_hub(entity, dip_switch::CONDITION),
        dip_location: collect_all(
            entity,
            dip_switch::DIP_LOCATION,
            EntityKind::DipLocation,
            |e| DipLocation {
                name: e.read_string(dip_location::NAME),
                number: e.read_string(dip_location::NUMBER),
                inverted: e.read_string(dip_location::INVERTED),
            },
        ),
        dip_value: collect_all(entity, dip_switch::DIP_VALUE, EntityKind::DipValue, |e| {
            DipValue {
                name: e.read_string(dip_value::NAME),
                value: e.read_string(dip_value::VALUE),
                default: e.read_string(dip_value::DEFAULT),
                condition: condition_from_hub(e, dip_value::CONDITION),
            }
        }),
    }
}

fn configuration_from_hub(entity: &Entity) -> Configuration {
    Configuration {
        name: entity.read_string(configuration::NAME),
        tag: entity.read_string(configuration::TAG),
        mask: entity.read_string(configuration::MASK),
        condition: condition_from_hub(entity, configuration::CONDITION),
        conf_location: collect_all(
            entity,
            configuration::CONF_LOCATION,
            EntityKind::ConfLocation,
            |e| ConfLocation {
                name: e.read_string(conf_location::NAME),
                number: e.read_string(conf_location::NUMBER),
                inverted: e.read_string(conf_location::INVERTED),
            },
        ),
        conf_setting: collect_all(
            entity,
            configuration::CONF_SETTING,
            EntityKind::ConfSetting,
            |e| ConfSetting {
                name: e.read_string(conf_setting::NAME),
                value: e.read_string(conf_setting::VALUE),
                default: e.read_string(conf_setting::DEFAULT),
                condition: condition_from_hub(e, conf_setting::CONDITION),
            },
        ),
    }
}

fn port_from_hub(entity: &Entity) -> Port {
    Port {
        tag: entity.read_string(port::TAG),
        analog: collect_all(entity, port::ANALOG, EntityKind::Analog, |e| Analog {
            mask: e.read_string(analog::MASK),
        }),
    }
}

fn adjuster_from_hub(entity: &Entity) -> Adjuster {
    Adjuster {
        name: entity.read_string(adjuster::NAME),
        default: entity.read_string(adjuster::DEFAULT),
        condition: condition_from_hub(entity, adjuster::CONDITION),
    }
}

fn driver_from_hub(entity: &Entity) -> Driver {
    Driver {
        status: entity.read_string(driver::STATUS),
        color: entity.read_string(driver::COLOR),
        sound: entity.read_string(driver::SOUND),
        palette_size: entity.read_string(driver::PALETTE_SIZE),
        emulation: entity.read_string(driver::EMULATION),
        cocktail: entity.read_string(driver::COCKTAIL),
        save_state: entity.read_string(driver::SAVE_STATE),
        requires_artwork: entity.read_string(driver::REQUIRES_ARTWORK),
        unofficial: entity.read_string(driver::UNOFFICIAL),
        no_sound_hardware: entity.read_string(driver::NO_SOUND_HARDWARE),
        incomplete: entity.read_string(driver::INCOMPLETE),
    }
}

fn feature_from_hub(entity: &Entity) -> Feature {
    Feature {
        r#type: entity.read_string(feature::TYPE),
        status: entity.read_string(feature::STATUS),
        overall: entity.read_string(feature::OVERALL),
    }
}

fn device_from_hub(entity: &Entity) -> Device {
    Device {
        r#type: entity.read_string(device::TYPE),
        tag: entity.read_string(device::TAG),
        fixed_image: entity.read_string(device::FIXED_IMAGE),
        mandatory: entity.read_string(device::MANDATORY),
        interface: entity.read_string(device::INTERFACE),
        instance: entity
            .read(device::INSTANCE, EntityKind::Instance)
            .map(|e| Instance {
                name: e.read_string(instance::NAME),
                brief_name: e.read_string(instance::BRIEF_NAME),
            }),
        extension: collect_all(entity, device::EXTENSION, EntityKind::Extension, |e| {
            Extension {
                name: e.read_string(extension::NAME),
            }
        }),
    }
}

fn slot_from_hub(entity: &Entity) -> Slot {
    Slot {
        name: entity.read_string(slot::NAME),
        slot_option: collect_all(entity, slot::SLOT_OPTION, EntityKind::SlotOption, |e| {
            SlotOption {
                name: e.read_string(slot_option::NAME),
                dev_name: e.read_string(slot_option::DEV_NAME),
                default: e.read_string(slot_option::DEFAULT),
            }
        }),
    }
}

fn software_list_from_hub(entity: &Entity) -> SoftwareList {
    SoftwareList {
        tag: entity.read_string(software_list::TAG),
        name: entity.read_string(software_list::NAME),
        status: entity.read_string(software_list::STATUS),
        filter: entity.read_string(software_list::FILTER),
    }
}

fn ram_option_from_hub(entity: &Entity) -> RamOption {
    RamOption {
        name: entity.read_string(ram_option::NAME),
        default: entity.read_string(ram_option::DEFAULT),
        content: entity.read_string(ram_option::CONTENT),
    }
}

#[cfg(test)]
#[path = "tests/listxml_tests.rs"]
mod tests;
