//! Dialog form state with presence-only validation

use serde::Serialize;

use crate::modal::ModalKind;

/// Error attached to a required field left blank
pub const REQUIRED_FIELD_ERROR: &str = "Campo obrigatório";

/// Input flavor, used by the renderer for hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Phone,
    Date,
    Time,
    Number,
    Multiline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<&'static str>,
}

impl FormField {
    fn new(label: &'static str, placeholder: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            label,
            placeholder,
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Presence check: any typed character counts, whitespace included
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Field values and focus of the dialog on screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    /// Build the empty form matching a dialog kind
    pub fn for_kind(kind: &ModalKind) -> Self {
        use FieldKind::*;

        let fields = match kind {
            ModalKind::ScheduleRequest => vec![
                FormField::new("Seu Nome", "Como quer ser chamado(a)?", Text, true),
                FormField::new("WhatsApp", "Seu contato para confirmarmos", Phone, true),
                FormField::new("Melhor Dia", "dd/mm/aaaa", Date, true),
                FormField::new("Horário", "hh:mm", Time, true),
                FormField::new(
                    "Deseja algum serviço específico?",
                    "Ex: Coloração vegetal, Corte, Hidratação...",
                    Multiline,
                    false,
                ),
            ],
            ModalKind::Service { subject: Some(_) } => vec![
                FormField::new("Nome Completo", "Seu nome", Text, true),
                FormField::new("WhatsApp", "(+351) 9XX XXX XXX", Phone, true),
                FormField::new("Data", "dd/mm/aaaa", Date, true),
                FormField::new("Hora", "hh:mm", Time, true),
                FormField::new(
                    "Deseja deixar uma nota?",
                    "Algum detalhe sobre seu cabelo?",
                    Multiline,
                    false,
                ),
            ],
            record => {
                let is_service = matches!(record, ModalKind::Service { .. });
                let (price_label, amount_label) = if is_service {
                    ("Preço (R$)", "Duração (min)")
                } else {
                    ("Preço de Venda", "Qtd em Estoque")
                };
                vec![
                    FormField::new("Nome Oficial", "Ex: Hidratação Profunda", Text, true),
                    FormField::new(price_label, "0,00", Number, true),
                    FormField::new(amount_label, "0", Number, true),
                    FormField::new(
                        "Notas Adicionais",
                        "Informações técnicas ou observações...",
                        Multiline,
                        false,
                    ),
                ]
            }
        };

        Self { fields, focused: 0 }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
            field.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Check required fields, attaching errors to blank ones.
    ///
    /// On failure focus moves to the first invalid field.
    pub fn validate(&mut self) -> bool {
        let mut first_invalid = None;
        for (i, field) in self.fields.iter_mut().enumerate() {
            if field.required && field.is_empty() {
                field.error = Some(REQUIRED_FIELD_ERROR);
                first_invalid.get_or_insert(i);
            } else {
                field.error = None;
            }
        }
        match first_invalid {
            Some(i) => {
                self.focused = i;
                false
            }
            None => true,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    pub fn filled_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.is_empty()).count()
    }
}
