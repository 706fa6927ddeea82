use serde::Serialize;

use crate::core::client::{PAGE_ID, SCENARIO_ID, UI_FLAVOR};

/* ---------------- Serde mapping for the availability call ---------------- */

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckRequest<'a> {
    include_suggestions: bool,
    sign_in_name: &'a str,
    uiflvr: u32,
    scid: u32,
    uaid: &'a str,
    hpgid: u32,
}

impl<'a> CheckRequest<'a> {
    pub(crate) fn new(identifier: &'a str, correlation_id: &'a str) -> Self {
        Self {
            include_suggestions: true,
            sign_in_name: identifier,
            uiflvr: UI_FLAVOR,
            scid: SCENARIO_ID,
            uaid: correlation_id,
            hpgid: PAGE_ID,
        }
    }
}
