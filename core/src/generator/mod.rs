use crate::*;
pub use random::*;

mod random;

pub trait FieldGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Field>;
}
