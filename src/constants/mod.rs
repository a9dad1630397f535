pub mod exam_defaults;
