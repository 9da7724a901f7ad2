use chrono::Utc;
use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{catalog, institution, Institution, PortalSettings};
use shared_ui::{use_toast, Button, ButtonVariant};

use crate::notify;
use crate::timer::sleep_ms;

/// Institution figures held in page state so a refresh can replace them.
#[derive(Clone, Copy, PartialEq)]
pub struct LiveInstitution {
    pub data: Signal<Option<Institution>>,
    pub refreshing: Signal<bool>,
}

pub fn use_live_institution() -> LiveInstitution {
    let data = use_signal(|| catalog().ok().map(|f| f.institution.clone()));
    let refreshing = use_signal(|| false);
    LiveInstitution { data, refreshing }
}

fn refresh_label(refreshing: bool) -> &'static str {
    if refreshing {
        "Refreshing..."
    } else {
        "Refresh Data"
    }
}

/// Re-fetches the analytics series after the configured delay. Disabled
/// while a refresh is in flight.
#[component]
pub fn RefreshButton(live: LiveInstitution) -> Element {
    let toast = use_toast();
    let portal: PortalSettings = use_context();
    let LiveInstitution {
        mut data,
        mut refreshing,
    } = live;
    let delay = portal.refresh_delay_ms;

    let refresh = move |_: MouseEvent| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        notify::info(toast, "Refreshing data...");
        spawn(async move {
            sleep_ms(delay).await;
            let mut rng = StdRng::seed_from_u64(Utc::now().timestamp_millis() as u64);
            let next = data
                .read()
                .as_ref()
                .map(|current| institution::refreshed(current, &mut rng));
            if next.is_some() {
                data.set(next);
            }
            refreshing.set(false);
            notify::success(toast, "Data refreshed successfully!");
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            disabled: refreshing(),
            onclick: refresh,
            {refresh_label(refreshing())}
        }
    }
}
