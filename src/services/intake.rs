//! Services coordinating the intake submit workflow.

use crate::domain::deep_link::{LinkOpener, WhatsAppLink};
use crate::domain::types::WhatsAppNumber;
use crate::dto::intake::IntakePageData;
use crate::forms::intake::IntakeForm;
use crate::services::ServiceResult;

/// Page data for a fresh, empty form.
pub fn load_intake_page(destination: &WhatsAppNumber) -> IntakePageData {
    IntakePageData::from(&IntakeForm::new(destination.clone()))
}

/// Submits `intake` and hands the deep link to `opener`. On rejection the
/// form keeps its values and the recorded errors for re-rendering.
///
/// Only field names are logged; submitted values never are.
pub fn submit_intake<O>(intake: &mut IntakeForm, opener: &O) -> ServiceResult<WhatsAppLink>
where
    O: LinkOpener + ?Sized,
{
    let link = intake.submit(opener).map_err(|err| {
        log::warn!("Rejected intake form: {err}");
        err
    })?;

    log::info!(
        "Handed client details off to WhatsApp number {}",
        intake.destination()
    );

    Ok(link)
}
