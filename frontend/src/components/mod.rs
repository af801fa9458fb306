pub mod form_group;
pub mod input_number;
pub mod slider;

pub use form_group::FormGroup;
pub use input_number::{ConnectedInputNumber, InputNumber};
pub use slider::Slider;
