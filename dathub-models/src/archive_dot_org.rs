//! Internet Archive item file listing (`<files>` from `*_files.xml`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub file: Vec<File>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub name: Option<String>,
    /// `original`, `derivative` or `metadata`.
    pub source: Option<String>,
    pub btih: Option<String>,
    pub mtime: Option<String>,
    pub size: Option<String>,
    pub md5: Option<String>,
    pub crc32: Option<String>,
    pub sha1: Option<String>,
    pub file_count: Option<String>,
    pub format: Option<String>,
    pub original: Option<String>,
    pub summation: Option<String>,
    pub matrix_number: Option<String>,
    pub collection_catalog_number: Option<String>,
    pub publisher: Option<String>,
    pub comment: Option<String>,

    // ASR / OCR derivative metadata
    pub asr_detected_lang: Option<String>,
    pub asr_detected_lang_conf: Option<String>,
    pub asr_transcribed_lang: Option<String>,
    pub whisper_asr_module_version: Option<String>,
    pub whisper_model_hash: Option<String>,
    pub whisper_model_name: Option<String>,
    pub whisper_version: Option<String>,
    pub cloth_cover_detection_module_version: Option<String>,
    pub hocr_char_to_word_hocr_version: Option<String>,
    pub hocr_char_to_word_module_version: Option<String>,
    pub hocr_fts_text_hocr_version: Option<String>,
    pub hocr_fts_text_module_version: Option<String>,
    pub hocr_page_index_hocr_version: Option<String>,
    pub hocr_page_index_module_version: Option<String>,
    pub tesseract_ocr: Option<String>,
    pub tesseract_ocr_converted: Option<String>,
    pub tesseract_ocr_detected_lang: Option<String>,
    pub tesseract_ocr_detected_lang_conf: Option<String>,
    pub tesseract_ocr_detected_script: Option<String>,
    pub tesseract_ocr_detected_script_conf: Option<String>,
    pub tesseract_ocr_module_version: Option<String>,
    pub tesseract_ocr_parameters: Option<String>,
    pub pdf_module_version: Option<String>,

    // Audio/video/image properties
    pub album: Option<String>,
    pub artist: Option<String>,
    pub bitrate: Option<String>,
    pub creator: Option<String>,
    pub height: Option<String>,
    pub length: Option<String>,
    pub preview_image: Option<String>,
    pub rotation: Option<String>,
    pub title: Option<String>,
    pub track: Option<String>,
    pub width: Option<String>,
}
