use hogar_api::models::{Device, DeviceKind};

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::toggle::{ToggleCoordinator, ToggleOutcome};

/// Mutually exclusive render states of a device list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Loading,
    Error(String),
    Empty,
    Loaded(Vec<Device>),
}

/// View model for a `luces` or `puertas` screen: fetch the collection once
/// per mount, then drive one optimistic toggle control per row.
pub struct DeviceListScreen {
    kind: DeviceKind,
    state: ScreenState,
    toggles: ToggleCoordinator,
}

impl DeviceListScreen {
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            kind,
            state: ScreenState::Loading,
            toggles: ToggleCoordinator::new(),
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn devices(&self) -> &[Device] {
        match &self.state {
            ScreenState::Loaded(devices) => devices,
            _ => &[],
        }
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.toggles.is_pending(id)
    }

    /// Fetch the collection. Runs once per mount; a failure parks the screen
    /// in `Error` until the next mount, there is no automatic retry.
    pub async fn load(&mut self, client: &ApiClient) -> &ScreenState {
        self.state = ScreenState::Loading;

        self.state = match client.list_devices(self.kind).await {
            Ok(devices) if devices.is_empty() => ScreenState::Empty,
            Ok(devices) => ScreenState::Loaded(devices),
            Err(e) => {
                tracing::error!(kind = %self.kind, "failed to load devices: {e}");
                ScreenState::Error(e.to_string())
            }
        };

        &self.state
    }

    fn device_mut(&mut self, id: i64) -> Option<&mut Device> {
        match &mut self.state {
            ScreenState::Loaded(devices) => devices.iter_mut().find(|d| d.id == id),
            _ => None,
        }
    }

    /// The optimistic toggle: flip the displayed state first, then persist.
    ///
    /// On success the row keeps the confirmed value; on failure the display
    /// reverts to the captured pre-toggle value and the error is surfaced.
    /// Input on a row whose request is still in flight is dropped, so the
    /// displayed state is always either confirmed or one flip ahead of
    /// exactly one outstanding request.
    pub async fn toggle(&mut self, client: &ApiClient, id: i64) -> Result<ToggleOutcome> {
        let current = match self.device_mut(id) {
            Some(device) => device.estado,
            None => {
                return Err(Error::Validation(format!("Dispositivo {id} desconocido")));
            }
        };

        let next = match self.toggles.begin(id, current) {
            Some(next) => next,
            None => return Ok(ToggleOutcome::InFlight),
        };

        // Optimistic step: show `next` before the backend confirms it.
        if let Some(device) = self.device_mut(id) {
            device.estado = next;
        }

        match client.set_status(self.kind, id, next).await {
            Ok(_) => {
                self.toggles.confirm(id);
                Ok(ToggleOutcome::Confirmed(next))
            }
            Err(e) => {
                if let Some(previous) = self.toggles.fail(id) {
                    if let Some(device) = self.device_mut(id) {
                        device.estado = previous;
                    }
                }
                tracing::error!(kind = %self.kind, id, "failed to update status: {e}");
                Err(e)
            }
        }
    }
}
