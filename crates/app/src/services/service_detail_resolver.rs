//! Service detail resolver: keeps the transaction form in step with the
//! selected service.
//!
//! On every change of the service selector the resolver:
//!
//! 1. hides the variable price section when nothing is selected, without
//!    touching the network;
//! 2. otherwise fetches the service's [`ServiceMetadata`] and either shows
//!    the section (applying whichever bounds are present) or hides it;
//! 3. on a failed lookup, logs the error and leaves the form as it was.
//!
//! Nothing is retried, timed out or cancelled. Each call is independent, so
//! with [`StaleResponsePolicy::Apply`] a slow response for an earlier
//! selection may land after a newer one and win.
//! [`StaleResponsePolicy::Discard`] drops such responses instead.

use std::sync::atomic::{AtomicU64, Ordering};

use printbill_domain::form::{FormPatch, Visibility};
use printbill_domain::id::ServiceId;

use crate::ports::{FetchError, PriceInputConstraints, SectionVisibility, ServiceMetadataSource};

/// What to do with a response that belongs to a superseded selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Apply every response in arrival order.
    #[default]
    Apply,
    /// Only the response for the most recent selection may touch the form.
    Discard,
}

/// Result of handling one selection change.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Nothing was selected; the section was hidden without a lookup.
    Cleared,
    /// The lookup succeeded and the patch was applied to the form.
    Applied(FormPatch),
    /// A newer selection superseded this one; its response was dropped.
    Superseded,
    /// The lookup failed; the form was left untouched.
    Failed(FetchError),
}

/// Drives the variable price section and price input from service metadata.
pub struct ServiceDetailResolver<S, V, P> {
    source: S,
    section: V,
    price_input: P,
    policy: StaleResponsePolicy,
    latest: AtomicU64,
}

impl<S, V, P> ServiceDetailResolver<S, V, P>
where
    S: ServiceMetadataSource,
    V: SectionVisibility,
    P: PriceInputConstraints,
{
    /// Create a resolver that applies every response it receives.
    pub fn new(source: S, section: V, price_input: P) -> Self {
        Self {
            source,
            section,
            price_input,
            policy: StaleResponsePolicy::default(),
            latest: AtomicU64::new(0),
        }
    }

    /// Choose how responses for superseded selections are handled.
    #[must_use]
    pub fn with_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Handle a change of the service selector.
    ///
    /// `selection` is the raw value of the control; `None` and `""` mean
    /// nothing is selected. Failures are logged and reported in the
    /// returned outcome, never propagated.
    pub async fn on_service_selection_changed(&self, selection: Option<&str>) -> SelectionOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(id) = ServiceId::from_selection(selection) else {
            self.section.hide();
            return SelectionOutcome::Cleared;
        };

        match self.source.fetch_metadata(&id).await {
            Ok(metadata) => {
                if self.is_superseded(ticket) {
                    tracing::debug!(service_id = %id, "dropping response for superseded selection");
                    return SelectionOutcome::Superseded;
                }
                let patch = FormPatch::from(metadata);
                self.apply(patch);
                SelectionOutcome::Applied(patch)
            }
            Err(err) => {
                if self.is_superseded(ticket) {
                    tracing::debug!(
                        service_id = %id,
                        error = %err,
                        "dropping failure for superseded selection"
                    );
                    return SelectionOutcome::Superseded;
                }
                tracing::error!(service_id = %id, error = %err, "error fetching service details");
                SelectionOutcome::Failed(err)
            }
        }
    }

    fn is_superseded(&self, ticket: u64) -> bool {
        self.policy == StaleResponsePolicy::Discard && self.latest.load(Ordering::SeqCst) != ticket
    }

    fn apply(&self, patch: FormPatch) {
        match patch.visibility {
            Visibility::Shown => {
                self.section.show();
                if let Some(min) = patch.min_price {
                    self.price_input.set_min(min);
                }
                if let Some(max) = patch.max_price {
                    self.price_input.set_max(max);
                }
            }
            Visibility::Hidden => self.section.hide(),
        }
    }
}
