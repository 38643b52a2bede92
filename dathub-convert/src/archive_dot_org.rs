//! Internet Archive file-listing adapter.
//!
//! An item listing has no record grouping, so every file becomes a Rom of a
//! single synthetic Machine. Going back, Roms from every machine are emitted.

use dathub_core::keys::{machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::archive_dot_org::{File, Files};

use crate::HubConvert;

/// Generates the two directions of a flat `File` field <-> Rom key mapping.
macro_rules! file_rom_fields {
    ( $( $field:ident => $key:ident ),* $(,)? ) => {
        fn file_to_rom(file: &File) -> Entity {
            let mut entity = Entity::new(EntityKind::Rom);
            $( entity.set_opt(rom::$key, file.$field.clone()); )*
            entity
        }

        fn rom_to_file(entity: &Entity) -> File {
            File {
                $( $field: entity.read_string(rom::$key), )*
            }
        }
    };
}

file_rom_fields! {
    name => NAME,
    source => SOURCE,
    btih => BITTORRENT_MAGNET_HASH,
    mtime => LAST_MODIFIED_TIME,
    size => SIZE,
    md5 => MD5,
    crc32 => CRC,
    sha1 => SHA1,
    file_count => FILE_COUNT,
    format => FORMAT,
    original => ORIGINAL,
    summation => SUMMATION,
    matrix_number => MATRIX_NUMBER,
    collection_catalog_number => COLLECTION_CATALOG_NUMBER,
    publisher => PUBLISHER,
    comment => COMMENT,
    asr_detected_lang => ASR_DETECTED_LANG,
    asr_detected_lang_conf => ASR_DETECTED_LANG_CONF,
    asr_transcribed_lang => ASR_TRANSCRIBED_LANG,
    whisper_asr_module_version => WHISPER_ASR_MODULE_VERSION,
    whisper_model_hash => WHISPER_MODEL_HASH,
    whisper_model_name => WHISPER_MODEL_NAME,
    whisper_version => WHISPER_VERSION,
    cloth_cover_detection_module_version => CLOTH_COVER_DETECTION_MODULE_VERSION,
    hocr_char_to_word_hocr_version => HOCR_CHAR_TO_WORD_HOCR_VERSION,
    hocr_char_to_word_module_version => HOCR_CHAR_TO_WORD_MODULE_VERSION,
    hocr_fts_text_hocr_version => HOCR_FTS_TEXT_HOCR_VERSION,
    hocr_fts_text_module_version => HOCR_FTS_TEXT_MODULE_VERSION,
    hocr_page_index_hocr_version => HOCR_PAGE_INDEX_HOCR_VERSION,
    hocr_page_index_module_version => HOCR_PAGE_INDEX_MODULE_VERSION,
    tesseract_ocr => TESSERACT_OCR,
    tesseract_ocr_converted => TESSERACT_OCR_CONVERTED,
    tesseract_ocr_detected_lang => TESSERACT_OCR_DETECTED_LANG,
    tesseract_ocr_detected_lang_conf => TESSERACT_OCR_DETECTED_LANG_CONF,
    tesseract_ocr_detected_script => TESSERACT_OCR_DETECTED_SCRIPT,
    tesseract_ocr_detected_script_conf => TESSERACT_OCR_DETECTED_SCRIPT_CONF,
    tesseract_ocr_module_version => TESSERACT_OCR_MODULE_VERSION,
    tesseract_ocr_parameters => TESSERACT_OCR_PARAMETERS,
    pdf_module_version => PDF_MODULE_VERSION,
    album => ALBUM,
    artist => ARTIST,
    bitrate => BITRATE,
    creator => CREATOR,
    height => HEIGHT,
    length => LENGTH,
    preview_image => PREVIEW_IMAGE,
    rotation => ROTATION,
    title => TITLE,
    track => TRACK,
    width => WIDTH,
}

impl HubConvert for Files {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut machines = Vec::new();
        if !self.file.is_empty() {
            let mut game = Entity::new(EntityKind::Machine);
            game.set_entities(machine::ROM, self.file.iter().map(file_to_rom).collect());
            machines.push(game);
        }
        MetadataFile::new(None, machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        Files {
            file: hub
                .machines()
                .into_iter()
                .flat_map(|m| m.read_all(machine::ROM, EntityKind::Rom))
                .map(rom_to_file)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/archive_dot_org_tests.rs"]
mod tests;
