//! Hash list adapter (SFV, MD5, SHA-1, SHA-256, SHA-384, SHA-512, SpamSum).
//!
//! A hash list has no notion of games, so every entry of every list is
//! folded into one synthetic machine. Writing back selects one hash kind
//! and explodes every machine's items into flat `file hash` entries.

use dathub_core::keys::{disk, machine, media, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::HashType;
use dathub_models::hashfile::{Hashfile, Md5, Sfv, Sha1, Sha256, Sha384, Sha512, SpamSum};

use crate::HubConvert;

impl HubConvert for Hashfile {
    type Variant = HashType;

    fn to_hub(&self) -> MetadataFile {
        let mut roms = Vec::new();
        roms.extend(self.sfv.iter().map(|e| entry_to_hub(&e.file, rom::CRC, &e.hash)));
        roms.extend(self.md5.iter().map(|e| entry_to_hub(&e.file, rom::MD5, &e.hash)));
        roms.extend(self.sha1.iter().map(|e| entry_to_hub(&e.file, rom::SHA1, &e.hash)));
        roms.extend(self.sha256.iter().map(|e| entry_to_hub(&e.file, rom::SHA256, &e.hash)));
        roms.extend(self.sha384.iter().map(|e| entry_to_hub(&e.file, rom::SHA384, &e.hash)));
        roms.extend(self.sha512.iter().map(|e| entry_to_hub(&e.file, rom::SHA512, &e.hash)));
        roms.extend(self.spamsum.iter().map(|e| entry_to_hub(&e.file, rom::SPAMSUM, &e.hash)));

        if roms.is_empty() {
            return MetadataFile::new(None, Vec::new());
        }

        let mut entity = Entity::new(EntityKind::Machine);
        entity.set_entities(machine::ROM, roms);
        MetadataFile::new(None, vec![entity])
    }

    fn from_hub(hub: &MetadataFile, variant: HashType) -> Self {
        let entries: Vec<(Option<String>, Option<String>)> = hub
            .machines()
            .into_iter()
            .flat_map(|m| entries_from_hub(m, variant))
            .collect();
        log::debug!(
            "Writing {} {} entries from {} machines",
            entries.len(),
            variant,
            hub.machines().len()
        );

        let mut list = Hashfile::default();
        match variant {
            HashType::Crc32 => {
                list.sfv = entries
                    .into_iter()
                    .map(|(file, hash)| Sfv { file, hash })
                    .collect();
            }
            HashType::Md5 => {
                list.md5 = entries
                    .into_iter()
                    .map(|(file, hash)| Md5 { hash, file })
                    .collect();
            }
            HashType::Sha1 => {
                list.sha1 = entries
                    .into_iter()
                    .map(|(file, hash)| Sha1 { hash, file })
                    .collect();
            }
            HashType::Sha256 => {
                list.sha256 = entries
                    .into_iter()
                    .map(|(file, hash)| Sha256 { hash, file })
                    .collect();
            }
            HashType::Sha384 => {
                list.sha384 = entries
                    .into_iter()
                    .map(|(file, hash)| Sha384 { hash, file })
                    .collect();
            }
            HashType::Sha512 => {
                list.sha512 = entries
                    .into_iter()
                    .map(|(file, hash)| Sha512 { hash, file })
                    .collect();
            }
            HashType::SpamSum => {
                list.spamsum = entries
                    .into_iter()
                    .map(|(file, hash)| SpamSum { hash, file })
                    .collect();
            }
        }
        list
    }
}

fn entry_to_hub(file: &Option<String>, hash_key: &str, hash: &Option<String>) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::NAME, file.clone());
    entity.set_opt(hash_key, hash.clone());
    entity
}

/// `(file, hash)` pairs for one machine: ROMs first, then disks, then media.
///
/// Every ROM yields an entry even when it lacks the requested hash. Disks
/// and media are only listed for hash kinds they can carry.
fn entries_from_hub(
    entity: &Entity,
    hash: HashType,
) -> Vec<(Option<String>, Option<String>)> {
    let mut entries = Vec::new();

    let rom_key = rom_hash_key(hash);
    for item in entity.read_all(machine::ROM, EntityKind::Rom) {
        entries.push((item.read_string(rom::NAME), item.read_string(rom_key)));
    }

    if let Some(key) = disk_hash_key(hash) {
        for item in entity.read_all(machine::DISK, EntityKind::Disk) {
            entries.push((item.read_string(disk::NAME), item.read_string(key)));
        }
    }

    if let Some(key) = media_hash_key(hash) {
        for item in entity.read_all(machine::MEDIA, EntityKind::Media) {
            entries.push((item.read_string(media::NAME), item.read_string(key)));
        }
    }

    entries
}

fn rom_hash_key(hash: HashType) -> &'static str {
    match hash {
        HashType::Crc32 => rom::CRC,
        HashType::Md5 => rom::MD5,
        HashType::Sha1 => rom::SHA1,
        HashType::Sha256 => rom::SHA256,
        HashType::Sha384 => rom::SHA384,
        HashType::Sha512 => rom::SHA512,
        HashType::SpamSum => rom::SPAMSUM,
    }
}

fn disk_hash_key(hash: HashType) -> Option<&'static str> {
    match hash {
        HashType::Md5 => Some(disk::MD5),
        HashType::Sha1 => Some(disk::SHA1),
        _ => None,
    }
}

fn media_hash_key(hash: HashType) -> Option<&'static str> {
    match hash {
        HashType::Md5 => Some(media::MD5),
        HashType::Sha1 => Some(media::SHA1),
        HashType::Sha256 => Some(media::SHA256),
        HashType::SpamSum => Some(media::SPAMSUM),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/hashfile_tests.rs"]
mod tests;
