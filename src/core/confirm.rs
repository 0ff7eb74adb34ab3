use crate::domain::model::Disposition;
use crate::domain::ports::Confirmer;

/// Click on a reservation-confirmation trigger: ask before letting the
/// action through.
pub async fn handle_confirm_click<C: Confirmer + ?Sized>(
    confirmer: &C,
    message: &str,
) -> Disposition {
    if confirmer.confirm(message).await {
        Disposition::Default
    } else {
        tracing::debug!("confirmation declined");
        Disposition::Prevented
    }
}
