//! Canonical hub keys, grouped by the entity kind that owns them.
//!
//! A key means the same thing no matter which format wrote it: `rom::NAME`
//! is always the ROM's file name. Formats populate whatever subset they
//! support and leave the rest absent.

/// Keys of the root [`EntityKind::MetadataFile`](super::EntityKind).
pub mod metadata_file {
    pub const HEADER: &str = "header";
    pub const MACHINE: &str = "machine";
}

/// Dataset-level metadata. A superset of every format's header fields.
pub mod header {
    pub const AUTHOR: &str = "author";
    pub const BIOS_MODE: &str = "biosmode";
    pub const BUILD: &str = "build";
    pub const CAN_OPEN: &str = "canopen";
    pub const CATEGORY: &str = "category";
    pub const COMMENT: &str = "comment";
    pub const DATE: &str = "date";
    pub const DAT_VERSION: &str = "datversion";
    pub const DEBUG: &str = "debug";
    pub const DESCRIPTION: &str = "description";
    pub const EMAIL: &str = "email";
    pub const EMULATOR_VERSION: &str = "emulatorversion";
    pub const FILE_NAME: &str = "filename";
    pub const FORCE_MERGING: &str = "forcemerging";
    pub const FORCE_NODUMP: &str = "forcenodump";
    pub const FORCE_PACKING: &str = "forcepacking";
    pub const FORCE_ZIPPING: &str = "forcezipping";
    /// Header-skipper name (ClrMamePro/Logiqx `header`).
    pub const HEADER: &str = "header";
    /// Column names of a delimited file's first row.
    pub const HEADER_ROW: &str = "headerrow";
    pub const HOMEPAGE: &str = "homepage";
    pub const ID: &str = "id";
    pub const IMAGES: &str = "images";
    pub const IM_FOLDER: &str = "imfolder";
    pub const INFOS: &str = "infos";
    pub const LOCK_BIOS_MODE: &str = "lockbiosmode";
    pub const LOCK_ROM_MODE: &str = "lockrommode";
    pub const LOCK_SAMPLE_MODE: &str = "locksamplemode";
    pub const MAME_CONFIG: &str = "mameconfig";
    pub const MERGE: &str = "merge";
    pub const NAME: &str = "name";
    pub const NEW_DAT: &str = "newdat";
    pub const NOTES: &str = "notes";
    pub const PLUGIN: &str = "plugin";
    pub const REF_NAME: &str = "refname";
    pub const ROM_MODE: &str = "rommode";
    pub const ROM_TITLE: &str = "romtitle";
    pub const ROOT_DIR: &str = "rootdir";
    pub const SAMPLE_MODE: &str = "samplemode";
    pub const SCHEMA_LOCATION: &str = "schemalocation";
    pub const SCREENSHOTS_HEIGHT: &str = "screenshotsheight";
    pub const SCREENSHOTS_WIDTH: &str = "screenshotswidth";
    pub const SEARCH: &str = "search";
    pub const SPLIT: &str = "split";
    pub const SYSTEM: &str = "system";
    pub const TIMESTAMP: &str = "timestamp";
    pub const TYPE: &str = "type";
    pub const URL: &str = "url";
    pub const VERSION: &str = "version";
}

/// One cataloged game, software title, device or set.
pub mod machine {
    // Scalars
    pub const BOARD: &str = "board";
    pub const BUTTONS: &str = "buttons";
    pub const CATEGORY: &str = "category";
    pub const CLONE_OF: &str = "cloneof";
    pub const CLONE_OF_ID: &str = "cloneofid";
    pub const COMMENT: &str = "comment";
    /// Free-form control description (AttractMode). Not the `input` controls.
    pub const CONTROL: &str = "control";
    pub const COUNTRY: &str = "country";
    pub const DESCRIPTION: &str = "description";
    pub const DISPLAY_COUNT: &str = "displaycount";
    pub const DISPLAY_TYPE: &str = "displaytype";
    pub const DUPLICATE_ID: &str = "duplicateid";
    pub const EMULATOR: &str = "emulator";
    pub const EXTRA: &str = "extra";
    pub const FAVORITE: &str = "favorite";
    pub const GEN_MSX_ID: &str = "genmsxid";
    pub const HISTORY: &str = "history";
    pub const ID: &str = "id";
    pub const IM1_CRC: &str = "im1crc";
    pub const IM2_CRC: &str = "im2crc";
    pub const IMAGE_NUMBER: &str = "imagenumber";
    pub const IS_BIOS: &str = "isbios";
    pub const IS_DEVICE: &str = "isdevice";
    pub const IS_MECHANICAL: &str = "ismechanical";
    pub const LANGUAGE: &str = "language";
    pub const LOCATION: &str = "location";
    pub const MANUFACTURER: &str = "manufacturer";
    pub const NAME: &str = "name";
    pub const NOTES: &str = "notes";
    pub const PLAYED_COUNT: &str = "playedcount";
    pub const PLAYED_TIME: &str = "playedtime";
    pub const PLAYERS: &str = "players";
    pub const PUBLISHER: &str = "publisher";
    pub const REBUILD_TO: &str = "rebuildto";
    pub const RELEASE_NUMBER: &str = "releasenumber";
    pub const ROM_OF: &str = "romof";
    pub const ROTATION: &str = "rotation";
    pub const RUNNABLE: &str = "runnable";
    pub const SAMPLE_OF: &str = "sampleof";
    pub const SAVE_TYPE: &str = "savetype";
    pub const SOURCE_FILE: &str = "sourcefile";
    pub const SOURCE_ROM: &str = "sourcerom";
    pub const STATUS: &str = "status";
    pub const SUPPORTED: &str = "supported";
    pub const SYSTEM: &str = "system";
    pub const TAGS: &str = "tags";
    pub const YEAR: &str = "year";

    // Nested
    pub const ADJUSTER: &str = "adjuster";
    pub const ARCHIVE: &str = "archive";
    pub const BIOS_SET: &str = "biosset";
    pub const CHIP: &str = "chip";
    pub const CONFIGURATION: &str = "configuration";
    pub const DEVICE: &str = "device";
    pub const DEVICE_REF: &str = "device_ref";
    pub const DIP_SWITCH: &str = "dipswitch";
    pub const DISK: &str = "disk";
    pub const DISPLAY: &str = "display";
    pub const DRIVER: &str = "driver";
    pub const DUMP: &str = "dump";
    pub const FEATURE: &str = "feature";
    pub const INFO: &str = "info";
    pub const INPUT: &str = "input";
    pub const MEDIA: &str = "media";
    pub const PART: &str = "part";
    pub const PORT: &str = "port";
    pub const RAM_OPTION: &str = "ramoption";
    pub const RELEASE: &str = "release";
    pub const ROM: &str = "rom";
    pub const SAMPLE: &str = "sample";
    pub const SHARED_FEAT: &str = "sharedfeat";
    pub const SLOT: &str = "slot";
    pub const SOFTWARE_LIST: &str = "softwarelist";
    pub const SOUND: &str = "sound";
    pub const TRURIP: &str = "trurip";
    pub const VIDEO: &str = "video";
}

pub mod rom {
    pub const ALBUM: &str = "album";
    pub const ALT_ROM_NAME: &str = "altromname";
    pub const ALT_TITLE: &str = "alttitle";
    pub const ARTIST: &str = "artist";
    pub const ASR_DETECTED_LANG: &str = "asrdetectedlang";
    pub const ASR_DETECTED_LANG_CONF: &str = "asrdetectedlangconf";
    pub const ASR_TRANSCRIBED_LANG: &str = "asrtranscribedlang";
    pub const BIOS: &str = "bios";
    pub const BITRATE: &str = "bitrate";
    pub const BITTORRENT_MAGNET_HASH: &str = "btih";
    pub const CLOTH_COVER_DETECTION_MODULE_VERSION: &str = "clothcoverdetectionmoduleversion";
    pub const COLLECTION_CATALOG_NUMBER: &str = "collectioncatalognumber";
    pub const COMMENT: &str = "comment";
    pub const CRC: &str = "crc";
    pub const CREATOR: &str = "creator";
    pub const DATE: &str = "date";
    pub const DISPOSE: &str = "dispose";
    pub const EXTENSION: &str = "extension";
    pub const FILE_COUNT: &str = "filecount";
    pub const FILE_IS_AVAILABLE: &str = "fileisavailable";
    pub const FLAGS: &str = "flags";
    pub const FORMAT: &str = "format";
    pub const HEADER: &str = "header";
    pub const HEIGHT: &str = "height";
    pub const HOCR_CHAR_TO_WORD_HOCR_VERSION: &str = "hocrchartowordhocrversion";
    pub const HOCR_CHAR_TO_WORD_MODULE_VERSION: &str = "hocrchartowordmoduleversion";
    pub const HOCR_FTS_TEXT_HOCR_VERSION: &str = "hocrftstexthocrversion";
    pub const HOCR_FTS_TEXT_MODULE_VERSION: &str = "hocrftstextmoduleversion";
    pub const HOCR_PAGE_INDEX_HOCR_VERSION: &str = "hocrpageindexhocrversion";
    pub const HOCR_PAGE_INDEX_MODULE_VERSION: &str = "hocrpageindexmoduleversion";
    pub const INVERTED: &str = "inverted";
    pub const LAST_MODIFIED_TIME: &str = "mtime";
    pub const LENGTH: &str = "length";
    pub const LOAD_FLAG: &str = "loadflag";
    pub const MATRIX_NUMBER: &str = "matrixnumber";
    pub const MD5: &str = "md5";
    pub const MERGE: &str = "merge";
    pub const MIA: &str = "mia";
    pub const NAME: &str = "name";
    pub const OFFSET: &str = "offset";
    pub const OPENMSX_TYPE: &str = "openmsxtype";
    pub const OPTIONAL: &str = "optional";
    pub const ORIGINAL: &str = "original";
    pub const PDF_MODULE_VERSION: &str = "pdfmoduleversion";
    pub const PREVIEW_IMAGE: &str = "previewimage";
    pub const PUBLISHER: &str = "publisher";
    pub const REGION: &str = "region";
    pub const REMARK: &str = "remark";
    pub const ROTATION: &str = "rotation";
    pub const SERIAL: &str = "serial";
    pub const SHA1: &str = "sha1";
    pub const SHA256: &str = "sha256";
    pub const SHA384: &str = "sha384";
    pub const SHA512: &str = "sha512";
    pub const SIZE: &str = "size";
    pub const SOURCE: &str = "source";
    pub const SPAMSUM: &str = "spamsum";
    pub const START: &str = "start";
    pub const STATUS: &str = "status";
    pub const SUMMATION: &str = "summation";
    pub const TESSERACT_OCR: &str = "tesseractocr";
    pub const TESSERACT_OCR_CONVERTED: &str = "tesseractocrconverted";
    pub const TESSERACT_OCR_DETECTED_LANG: &str = "tesseractocrdetectedlang";
    pub const TESSERACT_OCR_DETECTED_LANG_CONF: &str = "tesseractocrdetectedlangconf";
    pub const TESSERACT_OCR_DETECTED_SCRIPT: &str = "tesseractocrdetectedscript";
    pub const TESSERACT_OCR_DETECTED_SCRIPT_CONF: &str = "tesseractocrdetectedscriptconf";
    pub const TESSERACT_OCR_MODULE_VERSION: &str = "tesseractocrmoduleversion";
    pub const TESSERACT_OCR_PARAMETERS: &str = "tesseractocrparameters";
    pub const TITLE: &str = "title";
    pub const TRACK: &str = "track";
    pub const VALUE: &str = "value";
    pub const WHISPER_ASR_MODULE_VERSION: &str = "whisperasrmoduleversion";
    pub const WHISPER_MODEL_HASH: &str = "whispermodelhash";
    pub const WHISPER_MODEL_NAME: &str = "whispermodelname";
    pub const WHISPER_VERSION: &str = "whisperversion";
    pub const WIDTH: &str = "width";
    pub const XXHASH364: &str = "xxh364";
    pub const XXHASH3128: &str = "xxh3128";
}

pub mod disk {
    pub const FLAGS: &str = "flags";
    pub const INDEX: &str = "index";
    pub const MD5: &str = "md5";
    pub const MERGE: &str = "merge";
    pub const NAME: &str = "name";
    pub const OPTIONAL: &str = "optional";
    pub const REGION: &str = "region";
    pub const SHA1: &str = "sha1";
    pub const STATUS: &str = "status";
    pub const WRITABLE: &str = "writable";
}

pub mod media {
    pub const MD5: &str = "md5";
    pub const NAME: &str = "name";
    pub const SHA1: &str = "sha1";
    pub const SHA256: &str = "sha256";
    pub const SPAMSUM: &str = "spamsum";
}

pub mod sample {
    pub const NAME: &str = "name";
}

pub mod archive {
    pub const NAME: &str = "name";
}

pub mod release {
    pub const DATE: &str = "date";
    pub const DEFAULT: &str = "default";
    pub const LANGUAGE: &str = "language";
    pub const NAME: &str = "name";
    pub const REGION: &str = "region";
}

pub mod bios_set {
    pub const DEFAULT: &str = "default";
    pub const DESCRIPTION: &str = "description";
    pub const NAME: &str = "name";
}

pub mod device_ref {
    pub const NAME: &str = "name";
}

pub mod chip {
    pub const CLOCK: &str = "clock";
    pub const FLAGS: &str = "flags";
    pub const NAME: &str = "name";
    pub const SOUND_ONLY: &str = "soundonly";
    pub const TAG: &str = "tag";
    pub const TYPE: &str = "type";
}

pub mod display {
    pub const FLIP_X: &str = "flipx";
    pub const HB_END: &str = "hbend";
    pub const HB_START: &str = "hbstart";
    pub const HEIGHT: &str = "height";
    pub const H_TOTAL: &str = "htotal";
    pub const PIX_CLOCK: &str = "pixclock";
    pub const REFRESH: &str = "refresh";
    pub const ROTATE: &str = "rotate";
    pub const TAG: &str = "tag";
    pub const TYPE: &str = "type";
    pub const VB_END: &str = "vbend";
    pub const VB_START: &str = "vbstart";
    pub const V_TOTAL: &str = "vtotal";
    pub const WIDTH: &str = "width";
}

pub mod video {
    pub const ASPECT_X: &str = "aspectx";
    pub const ASPECT_Y: &str = "aspecty";
    pub const HEIGHT: &str = "height";
    pub const ORIENTATION: &str = "orientation";
    pub const REFRESH: &str = "refresh";
    pub const SCREEN: &str = "screen";
    pub const WIDTH: &str = "width";
}

pub mod sound {
    pub const CHANNELS: &str = "channels";
}

pub mod input {
    pub const BUTTONS: &str = "buttons";
    pub const COINS: &str = "coins";
    /// A `Control` sequence (Listxml) or a free-form scalar (ClrMamePro).
    pub const CONTROL: &str = "control";
    pub const PLAYERS: &str = "players";
    pub const SERVICE: &str = "service";
    pub const TILT: &str = "tilt";
}

pub mod control {
    pub const BUTTONS: &str = "buttons";
    pub const KEY_DELTA: &str = "keydelta";
    pub const MAXIMUM: &str = "maximum";
    pub const MINIMUM: &str = "minimum";
    pub const PLAYER: &str = "player";
    pub const REQ_BUTTONS: &str = "reqbuttons";
    pub const REVERSE: &str = "reverse";
    pub const SENSITIVITY: &str = "sensitivity";
    pub const TYPE: &str = "type";
    pub const WAYS: &str = "ways";
    pub const WAYS2: &str = "ways2";
    pub const WAYS3: &str = "ways3";
}

pub mod dip_switch {
    pub const CONDITION: &str = "condition";
    pub const DEFAULT: &str = "default";
    pub const DIP_LOCATION: &str = "diplocation";
    pub const DIP_VALUE: &str = "dipvalue";
    /// Plain string settings (ClrMamePro).
    pub const ENTRY: &str = "entry";
    pub const MASK: &str = "mask";
    pub const NAME: &str = "name";
    pub const TAG: &str = "tag";
}

pub mod condition {
    pub const MASK: &str = "mask";
    pub const RELATION: &str = "relation";
    pub const TAG: &str = "tag";
    pub const VALUE: &str = "value";
}

pub mod dip_location {
    pub const INVERTED: &str = "inverted";
    pub const NAME: &str = "name";
    pub const NUMBER: &str = "number";
}

pub mod dip_value {
    pub const CONDITION: &str = "condition";
    pub const DEFAULT: &str = "default";
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
}

pub mod configuration {
    pub const CONDITION: &str = "condition";
    pub const CONF_LOCATION: &str = "conflocation";
    pub const CONF_SETTING: &str = "confsetting";
    pub const MASK: &str = "mask";
    pub const NAME: &str = "name";
    pub const TAG: &str = "tag";
}

pub mod conf_location {
    pub const INVERTED: &str = "inverted";
    pub const NAME: &str = "name";
    pub const NUMBER: &str = "number";
}

pub mod conf_setting {
    pub const CONDITION: &str = "condition";
    pub const DEFAULT: &str = "default";
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
}

pub mod port {
    pub const ANALOG: &str = "analog";
    pub const TAG: &str = "tag";
}

pub mod analog {
    pub const MASK: &str = "mask";
}

pub mod adjuster {
    pub const CONDITION: &str = "condition";
    pub const DEFAULT: &str = "default";
    pub const NAME: &str = "name";
}

pub mod driver {
    pub const BLIT: &str = "blit";
    pub const COCKTAIL: &str = "cocktail";
    pub const COLOR: &str = "color";
    pub const EMULATION: &str = "emulation";
    pub const INCOMPLETE: &str = "incomplete";
    pub const NO_SOUND_HARDWARE: &str = "nosoundhardware";
    pub const PALETTE_SIZE: &str = "palettesize";
    pub const REQUIRES_ARTWORK: &str = "requiresartwork";
    pub const SAVE_STATE: &str = "savestate";
    pub const SOUND: &str = "sound";
    pub const STATUS: &str = "status";
    pub const UNOFFICIAL: &str = "unofficial";
}

/// Emulation features (Listxml) and software-part features (SoftwareList).
pub mod feature {
    pub const NAME: &str = "name";
    pub const OVERALL: &str = "overall";
    pub const STATUS: &str = "status";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
}

pub mod device {
    pub const EXTENSION: &str = "extension";
    pub const FIXED_IMAGE: &str = "fixed_image";
    pub const INSTANCE: &str = "instance";
    pub const INTERFACE: &str = "interface";
    pub const MANDATORY: &str = "mandatory";
    pub const TAG: &str = "tag";
    pub const TYPE: &str = "type";
}

pub mod instance {
    pub const BRIEF_NAME: &str = "briefname";
    pub const NAME: &str = "name";
}

pub mod extension {
    pub const NAME: &str = "name";
}

pub mod slot {
    pub const NAME: &str = "name";
    pub const SLOT_OPTION: &str = "slotoption";
}

pub mod slot_option {
    pub const DEFAULT: &str = "default";
    pub const DEV_NAME: &str = "devname";
    pub const NAME: &str = "name";
}

pub mod software_list {
    pub const FILTER: &str = "filter";
    pub const NAME: &str = "name";
    pub const STATUS: &str = "status";
    pub const TAG: &str = "tag";
}

pub mod ram_option {
    pub const CONTENT: &str = "content";
    pub const DEFAULT: &str = "default";
    pub const NAME: &str = "name";
}

pub mod info {
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
}

pub mod shared_feat {
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
}

pub mod part {
    pub const DATA_AREA: &str = "dataarea";
    pub const DIP_SWITCH: &str = "dipswitch";
    pub const DISK_AREA: &str = "diskarea";
    pub const FEATURE: &str = "feature";
    pub const INTERFACE: &str = "interface";
    pub const NAME: &str = "name";
}

pub mod data_area {
    pub const ENDIANNESS: &str = "endianness";
    pub const NAME: &str = "name";
    pub const ROM: &str = "rom";
    pub const SIZE: &str = "size";
    pub const WIDTH: &str = "width";
}

pub mod disk_area {
    pub const DISK: &str = "disk";
    pub const NAME: &str = "name";
}

/// An OpenMSX dump. Exactly one of the three ROM keys is expected.
pub mod dump {
    pub const MEGA_ROM: &str = "megarom";
    pub const ORIGINAL: &str = "original";
    pub const ROM: &str = "rom";
    pub const SCC_PLUS_CART: &str = "sccpluscart";
}

pub mod original {
    pub const CONTENT: &str = "content";
    pub const VALUE: &str = "value";
}

pub mod trurip {
    pub const CLONE_OF: &str = "cloneof";
    pub const CRC: &str = "crc";
    pub const DEVELOPER: &str = "developer";
    pub const ENABLED: &str = "enabled";
    pub const GENRE: &str = "genre";
    pub const PLAYERS: &str = "players";
    pub const PUBLISHER: &str = "publisher";
    pub const RATINGS: &str = "ratings";
    pub const RELATED_TO: &str = "relatedto";
    pub const SCORE: &str = "score";
    pub const SOURCE: &str = "source";
    pub const SUBGENRE: &str = "subgenre";
    pub const TITLE_ID: &str = "titleid";
    pub const YEAR: &str = "year";
}

/// OfflineList `<infos>`: one [`info_item`] per displayed column.
pub mod infos {
    pub const COMMENT: &str = "comment";
    pub const FILES: &str = "files";
    pub const IM1_CRC: &str = "im1crc";
    pub const IM2_CRC: &str = "im2crc";
    pub const LANGUAGE_NUMBER: &str = "languagenumber";
    pub const LOCATION: &str = "location";
    pub const PUBLISHER: &str = "publisher";
    pub const RELEASE_NUMBER: &str = "releasenumber";
    pub const ROM_CRC: &str = "romcrc";
    pub const ROM_SIZE: &str = "romsize";
    pub const SAVE_TYPE: &str = "savetype";
    pub const SOURCE_ROM: &str = "sourcerom";
    pub const TITLE: &str = "title";
}

pub mod info_item {
    pub const DEFAULT: &str = "default";
    pub const IN_NAMING_OPTION: &str = "innamingoption";
    pub const VISIBLE: &str = "visible";
}

pub mod new_dat {
    pub const DAT_URL: &str = "daturl";
    pub const DAT_VERSION_URL: &str = "datversionurl";
    pub const IM_URL: &str = "imurl";
}

pub mod dat_url {
    pub const CONTENT: &str = "content";
    pub const FILE_NAME: &str = "filename";
}

pub mod search {
    pub const TO: &str = "to";
}

pub mod to {
    pub const AUTO: &str = "auto";
    pub const DEFAULT: &str = "default";
    pub const FIND: &str = "find";
    pub const VALUE: &str = "value";
}

pub mod find {
    pub const CONTENT: &str = "content";
    pub const OPERATION: &str = "operation";
    pub const VALUE: &str = "value";
}

pub mod images {
    pub const HEIGHT: &str = "height";
    pub const IMAGE: &str = "image";
    pub const WIDTH: &str = "width";
}

pub mod image {
    pub const HEIGHT: &str = "height";
    pub const WIDTH: &str = "width";
    pub const X: &str = "x";
    pub const Y: &str = "y";
}
