mod cart;
mod order;
mod payment;
mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::cart::CartService;
pub use self::order::{OrderLifecycleService, OrderPlacementService};
pub use self::payment::PaymentService;
pub use self::settings::{spawn_settings_watcher, SettingsResolver};

/// Flattens `validator` output into the per-field messages the API returns.
pub(crate) fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages
}
