pub mod formatter;

pub use formatter::{
    format_cost, format_exam_details, format_grade, format_grading_error, format_quote_json,
    format_rental_quote, format_vehicle_menu, should_use_colors, WELCOME_BANNER,
};
