//! Modal/form session: which dialog is open, for which kind of record

use salon_core::catalog::data::find_service;
use salon_core::prelude::*;
use salon_core::{Notification, ProductId, ServiceId};
use serde::Serialize;

use crate::form::FormState;

/// Kind of record a dialog books or edits, with its optional subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalKind {
    /// Book a service (subject set) or create a service record (no subject)
    Service { subject: Option<ServiceId> },
    Product { subject: Option<ProductId> },
    Customer,
    /// Generic appointment request from the home page
    ScheduleRequest,
}

impl ModalKind {
    pub fn booking(service: ServiceId) -> Self {
        ModalKind::Service {
            subject: Some(service),
        }
    }

    pub fn new_service() -> Self {
        ModalKind::Service { subject: None }
    }

    pub fn new_product() -> Self {
        ModalKind::Product { subject: None }
    }

    /// Same kind with the subject reference dropped
    pub fn without_subject(self) -> Self {
        match self {
            ModalKind::Service { .. } => ModalKind::Service { subject: None },
            ModalKind::Product { .. } => ModalKind::Product { subject: None },
            other => other,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ModalKind::Service { subject: Some(id) } => match find_service(*id) {
                Some(service) => format!("Agendar {}", service.name),
                None => "Agendar Ritual".to_string(),
            },
            ModalKind::Service { subject: None } => "Novo Serviço".to_string(),
            ModalKind::Product { .. } => "Novo Produto".to_string(),
            ModalKind::Customer => "Novo Cliente".to_string(),
            ModalKind::ScheduleRequest => "Agendar Ritual".to_string(),
        }
    }

    /// Success message raised when the dialog is submitted
    pub fn success_message(&self) -> String {
        match self {
            ModalKind::Service { subject: Some(id) } => {
                let name = find_service(*id).map(|s| s.name).unwrap_or("seu ritual");
                format!("Solicitação para {} enviada com sucesso!", name)
            }
            ModalKind::ScheduleRequest => {
                "Solicitação enviada! Vamos confirmar seu horário pelo Whats, mn.".to_string()
            }
            _ => "Registro salvo com sucesso!".to_string(),
        }
    }
}

/// Per-view dialog state. At most one dialog is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalSession {
    kind: Option<ModalKind>,
    is_open: bool,
}

impl ModalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog; a later call replaces any previous one
    pub fn open(&mut self, kind: ModalKind) {
        if self.is_open {
            debug!("Replacing open modal {:?} with {:?}", self.kind, kind);
        } else {
            debug!("Opening modal {:?}", kind);
        }
        self.kind = Some(kind);
        self.is_open = true;
    }

    /// Hide the dialog, keeping kind and subject for a pre-filled reopen
    pub fn close(&mut self) {
        if self.is_open {
            debug!("Closing modal {:?}", self.kind);
        }
        self.is_open = false;
    }

    /// Submit the open dialog, returning the notification to raise.
    ///
    /// The dialog closes and its subject is cleared. Returns `None` when no
    /// dialog is open.
    pub fn submit(&mut self, payload: &FormState) -> Option<Notification> {
        if !self.is_open {
            return None;
        }
        let kind = self.kind?;
        debug!(
            "Submitting modal {:?} with {} filled field(s)",
            kind,
            payload.filled_count()
        );
        let notification = Notification::success(kind.success_message());
        self.is_open = false;
        self.kind = Some(kind.without_subject());
        Some(notification)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Last opened kind, even if the dialog is closed
    pub fn kind(&self) -> Option<ModalKind> {
        self.kind
    }

    /// Kind of the dialog currently on screen
    pub fn active(&self) -> Option<ModalKind> {
        if self.is_open {
            self.kind
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_kind_and_subject() {
        let mut modal = ModalSession::new();
        modal.open(ModalKind::booking(ServiceId(2)));
        assert!(modal.is_open());
        assert_eq!(modal.active(), Some(ModalKind::booking(ServiceId(2))));
    }

    #[test]
    fn test_open_twice_replaces_without_stacking() {
        let mut modal = ModalSession::new();
        modal.open(ModalKind::new_service());
        modal.open(ModalKind::Customer);
        assert!(modal.is_open());
        assert_eq!(modal.active(), Some(ModalKind::Customer));
    }

    #[test]
    fn test_close_keeps_kind_and_subject() {
        let mut modal = ModalSession::new();
        modal.open(ModalKind::booking(ServiceId(1)));
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.active(), None);
        assert_eq!(modal.kind(), Some(ModalKind::booking(ServiceId(1))));
    }

    #[test]
    fn test_submit_closes_clears_subject_and_notifies() {
        let mut modal = ModalSession::new();
        let kind = ModalKind::booking(ServiceId(1));
        modal.open(kind);
        let form = FormState::for_kind(&kind);

        let notification = modal.submit(&form).unwrap();
        assert_eq!(
            notification.message,
            "Solicitação para Corte Orgânico enviada com sucesso!"
        );
        assert!(!modal.is_open());
        assert_eq!(modal.kind(), Some(ModalKind::Service { subject: None }));
    }

    #[test]
    fn test_submit_when_closed_is_noop() {
        let mut modal = ModalSession::new();
        let form = FormState::for_kind(&ModalKind::Customer);
        assert!(modal.submit(&form).is_none());
    }

    #[test]
    fn test_titles() {
        assert_eq!(ModalKind::booking(ServiceId(3)).title(), "Agendar Coloração Vegetal");
        assert_eq!(ModalKind::new_service().title(), "Novo Serviço");
        assert_eq!(ModalKind::new_product().title(), "Novo Produto");
        assert_eq!(ModalKind::Customer.title(), "Novo Cliente");
        assert_eq!(ModalKind::ScheduleRequest.title(), "Agendar Ritual");
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            ModalKind::ScheduleRequest.success_message(),
            "Solicitação enviada! Vamos confirmar seu horário pelo Whats, mn."
        );
        assert_eq!(
            ModalKind::new_product().success_message(),
            "Registro salvo com sucesso!"
        );
    }

    #[test]
    fn test_modal_kind_serializes_tagged() {
        let json = serde_json::to_string(&ModalKind::booking(ServiceId(4))).unwrap();
        assert_eq!(json, r#"{"kind":"service","subject":4}"#);
    }
}
