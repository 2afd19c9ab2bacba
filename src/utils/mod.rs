pub mod layout;
pub mod path;
pub mod style;
pub mod text_input;

pub use layout::{center_fixed, center_popup, create_standard_layout};
pub use path::{
    expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir, get_log_path,
    get_user_path, LOG_FILE_NAME,
};
pub use style::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
