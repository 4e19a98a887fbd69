pub mod detection_record;
pub mod mask_scan_use_case;
pub mod preprocess;
pub mod report;
