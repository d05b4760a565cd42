use std::fmt;

use thiserror::Error;

pub const NOT_INFORMED: &str = "Não informado";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Vsl,
    Short,
    Longform,
    Ads,
}

impl ProjectType {
    /// Order of the options in the project type select.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Vsl,
        ProjectType::Short,
        ProjectType::Longform,
        ProjectType::Ads,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Vsl => "vsl",
            ProjectType::Short => "short",
            ProjectType::Longform => "longform",
            ProjectType::Ads => "ads",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Vsl => "VSL (Video Sales Letter)",
            ProjectType::Short => "Vídeo Curto (Reels/TikTok)",
            ProjectType::Longform => "Vídeo Longo (YouTube)",
            ProjectType::Ads => "Anúncio / Ad",
        }
    }

    /// Maps a `<select>` value back to a project type. The empty
    /// placeholder option yields `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::ProjectType => "project type",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub description: String,
    pub reference_link: String,
}

impl LeadForm {
    /// First required field left empty, if any. Mirrors the browser's
    /// `required` check, which accepts whitespace-only text.
    pub fn missing_field(&self) -> Option<Field> {
        if self.name.is_empty() {
            Some(Field::Name)
        } else if self.email.is_empty() {
            Some(Field::Email)
        } else if self.project_type.is_none() {
            Some(Field::ProjectType)
        } else if self.description.is_empty() {
            Some(Field::Description)
        } else {
            None
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == LeadForm::default()
    }

    /// Plain-text WhatsApp message; `*...*` renders bold in the app.
    pub fn message(&self) -> String {
        let project_type = self.project_type.map(ProjectType::label).unwrap_or_default();
        let reference = match self.reference_link.trim() {
            "" => NOT_INFORMED,
            link => link,
        };

        format!(
            "*Novo Orçamento - Portfólio*\n\n\
             *Nome:* {}\n\
             *Email:* {}\n\
             *Tipo de Projeto:* {}\n\
             *Descrição:* {}\n\
             *Link de Referência:* {}",
            self.name, self.email, project_type, self.description, reference
        )
    }

    /// wa.me deep link that opens a chat with `number` pre-filled with
    /// [`LeadForm::message`].
    pub fn whatsapp_url(&self, number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.message())
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    #[error("a budget request is already being sent")]
    InFlight,
    #[error("required field {0} is empty")]
    Missing(Field),
}

/// What a finished submission leaves behind: the deep link to open and the
/// state the form and the submission go back to.
#[derive(Clone, Debug, PartialEq)]
pub struct Completed {
    pub url: String,
    pub form: LeadForm,
    pub submission: Submission,
}

/// Submit lifecycle of the budget form. Holds a snapshot of the lead while
/// the simulated send is pending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    lead: Option<LeadForm>,
}

impl Submission {
    pub fn is_submitting(&self) -> bool {
        self.lead.is_some()
    }

    pub fn begin(&self, form: &LeadForm) -> Result<Submission, SubmitRefused> {
        if self.is_submitting() {
            return Err(SubmitRefused::InFlight);
        }
        if let Some(field) = form.missing_field() {
            return Err(SubmitRefused::Missing(field));
        }
        Ok(Submission { lead: Some(form.clone()) })
    }

    /// `None` when nothing was in flight.
    pub fn finish(self, number: &str) -> Option<Completed> {
        let lead = self.lead?;
        Some(Completed {
            url: lead.whatsapp_url(number),
            form: LeadForm::default(),
            submission: Submission::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            project_type: Some(ProjectType::Vsl),
            description: "Preciso de um VSL".to_string(),
            reference_link: String::new(),
        }
    }

    fn decoded_text(url: &str) -> String {
        let (_, query) = url.split_once("?text=").expect("url should carry a text param");
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn message_uses_label_and_not_informed() {
        let message = filled().message();
        assert!(message.starts_with("*Novo Orçamento - Portfólio*\n\n*Nome:* Ana Souza\n"));
        assert!(message.contains("*Email:* ana@example.com\n"));
        assert!(message.contains("*Tipo de Projeto:* VSL (Video Sales Letter)"));
        assert!(message.contains("*Descrição:* Preciso de um VSL\n"));
        assert!(message.ends_with("*Link de Referência:* Não informado"));
    }

    #[test]
    fn whitespace_reference_counts_as_missing() {
        let mut form = filled();
        form.reference_link = "   ".to_string();
        assert!(form.message().contains("*Link de Referência:* Não informado"));
    }

    #[test]
    fn reference_link_survives_encoding() {
        let mut form = filled();
        form.reference_link = "https://drive.google.com/file/d/abc?usp=sharing&x=1#top".to_string();

        let url = form.whatsapp_url("5511912345678");
        assert!(url.starts_with("https://wa.me/5511912345678?text="));

        let text = decoded_text(&url);
        assert!(text.contains(
            "*Link de Referência:* https://drive.google.com/file/d/abc?usp=sharing&x=1#top"
        ));
        assert_eq!(text, form.message());
    }

    #[test]
    fn encoded_query_has_no_reserved_characters() {
        let url = filled().whatsapp_url("5500000000000");
        let (_, query) = url.split_once("?text=").unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert!(!query.contains('*'));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn project_type_round_trips_through_select_values() {
        for project_type in ProjectType::ALL {
            assert_eq!(ProjectType::from_value(project_type.value()), Some(project_type));
        }
        assert_eq!(ProjectType::from_value(""), None);
        assert_eq!(ProjectType::from_value("podcast"), None);
        assert_eq!(ProjectType::Short.label(), "Vídeo Curto (Reels/TikTok)");
    }

    #[test]
    fn missing_field_reports_first_blank_required_field() {
        assert_eq!(filled().missing_field(), None);
        assert_eq!(LeadForm::default().missing_field(), Some(Field::Name));

        let mut form = filled();
        form.project_type = None;
        assert_eq!(form.missing_field(), Some(Field::ProjectType));

        form = filled();
        form.description = String::new();
        assert_eq!(form.missing_field(), Some(Field::Description));
    }

    #[test]
    fn whitespace_only_fields_pass_like_native_required() {
        let form = LeadForm {
            name: "   ".to_string(),
            email: "ana@example.com".to_string(),
            project_type: Some(ProjectType::Vsl),
            description: "\n".to_string(),
            reference_link: String::new(),
        };
        assert_eq!(form.missing_field(), None);
        assert!(Submission::default().begin(&form).is_ok());
    }

    #[test]
    fn finished_submission_resets_form_and_flag() {
        let form = filled();
        let started = Submission::default().begin(&form).unwrap();
        assert!(started.is_submitting());

        let done = started.finish("5511912345678").expect("submission was in flight");
        assert!(done.form.is_blank());
        assert!(done.form.name.is_empty());
        assert!(done.form.email.is_empty());
        assert!(done.form.project_type.is_none());
        assert!(done.form.description.is_empty());
        assert!(done.form.reference_link.is_empty());
        assert!(!done.submission.is_submitting());
        assert_eq!(done.url, form.whatsapp_url("5511912345678"));
    }

    #[test]
    fn second_begin_while_sending_is_refused() {
        let started = Submission::default().begin(&filled()).unwrap();
        assert_eq!(started.begin(&filled()), Err(SubmitRefused::InFlight));

        let done = started.finish("5500000000000").unwrap();
        assert!(done.submission.begin(&filled()).is_ok());
    }

    #[test]
    fn begin_refuses_missing_fields_and_idle_finish_is_noop() {
        let mut form = filled();
        form.project_type = None;
        assert_eq!(
            Submission::default().begin(&form),
            Err(SubmitRefused::Missing(Field::ProjectType))
        );
        assert_eq!(Submission::default().finish("5500000000000"), None);
    }

    #[test]
    fn default_form_is_blank() {
        let form = LeadForm::default();
        assert!(form.is_blank());
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.project_type.is_none());
        assert!(form.description.is_empty());
        assert!(form.reference_link.is_empty());
        assert!(!filled().is_blank());
    }
}
