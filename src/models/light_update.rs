use serde::{Deserialize, Serialize};

/// Partial state change for one light.
///
/// Every field is optional and absent by default; only fields explicitly set
/// are serialized. The hub treats a key's presence as the instruction to
/// change that attribute, so absent fields must be omitted entirely rather
/// than sent as null or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
}

impl LightUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    pub fn hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    pub fn sat(mut self, sat: u8) -> Self {
        self.sat = Some(sat);
        self
    }

    pub fn bri(mut self, bri: u8) -> Self {
        self.bri = Some(bri);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_none() && self.hue.is_none() && self.sat.is_none() && self.bri.is_none()
    }
}
