//! Best-match lookup of a device against the static declarations table.

use crate::domain::model::DeviceTypeDeclaration;

/// Selects the declaration that best fits a hardware model code and a
/// normalized (lowercased, hash-stripped) color token.
///
/// Declarations covering the model code are considered in source order: the
/// first whose identifier ends with the color token wins, otherwise the
/// first covering declaration. `None` means the model code is not in the
/// table at all; callers substitute their "Unknown Device" label.
pub fn matching_device_type<'a>(
    model_code: &str,
    color_token: &str,
    declarations: &'a [DeviceTypeDeclaration],
) -> Option<&'a DeviceTypeDeclaration> {
    let candidates: Vec<&DeviceTypeDeclaration> = declarations
        .iter()
        .filter(|declaration| declaration.model_codes.iter().any(|code| code == model_code))
        .collect();

    candidates
        .iter()
        .find(|declaration| {
            declaration
                .identifier
                .to_ascii_lowercase()
                .ends_with(color_token)
        })
        .copied()
        .or_else(|| candidates.first().copied())
}
