pub mod bounds;
pub mod schema;
pub mod slider;
pub mod value;

pub use bounds::{parse_number, NumberConstraints, NumericBounds, DEFAULT_STEP};
pub use schema::{FormSchema, NumberSchema, NumberType, SchemaError};
pub use slider::forward_slider_value;
pub use value::FieldValue;
