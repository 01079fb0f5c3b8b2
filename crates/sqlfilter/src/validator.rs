//! Consistency checks for a completed `FIELD OPERATION VALUE` condition.

use crate::catalog::{FieldCatalog, FieldDescriptor, Operation};
use crate::error::{GrammarError, GrammarResult};

/// Checks that the field exists, the operation is legal for its type, and the
/// value parses under the type's rules.
pub fn check_condition(
    field: &str,
    operation: &str,
    value: &str,
) -> GrammarResult<&'static FieldDescriptor> {
    let descriptor = FieldCatalog::lookup(field).ok_or_else(|| GrammarError::UnknownField {
        name: field.to_string(),
        suggestion: FieldCatalog::suggest(field).map(str::to_string),
    })?;

    let operation = Operation::from_symbol(operation).ok_or_else(|| {
        GrammarError::UnknownOperation {
            symbol: operation.to_string(),
        }
    })?;

    if !descriptor.allows(operation) {
        return Err(GrammarError::OperationNotAllowed {
            operation: operation.to_string(),
            field: descriptor.name.to_string(),
            field_type: descriptor.field_type.to_string(),
        });
    }

    descriptor.field_type.validate(descriptor.name, value)?;
    Ok(descriptor)
}
