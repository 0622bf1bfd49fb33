//! `thindown contact` and `thindown sample`: fill a form from flags and post
//! it through a [`FormController`].

use std::io::Write;

use anyhow::Result;
use clap::Args;
use thindown_core::{
  field::FieldErrors,
  form::Submittable,
  forms::{ContactDraft, ContactField, ContactRequest, SampleDraft, SampleField, SampleRequest},
  text::format_phone_number,
};
use thindown_forms::{FormController, SubmissionTransport, SubmitOutcome};

// ─── Arguments ────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct ContactArgs {
  #[arg(long)]
  pub first_name:     String,
  #[arg(long)]
  pub last_name:      String,
  #[arg(long)]
  pub email:          String,
  #[arg(long)]
  pub phone:          Option<String>,
  #[arg(long)]
  pub company:        Option<String>,
  /// Application category token, e.g. `military`.
  #[arg(long)]
  pub area:           Option<String>,
  #[arg(long)]
  pub message:        String,
  /// Accept the privacy policy.
  #[arg(long)]
  pub accept_privacy: bool,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
  #[arg(long)]
  pub first_name:              String,
  #[arg(long)]
  pub last_name:               String,
  #[arg(long)]
  pub email:                   String,
  #[arg(long)]
  pub phone:                   Option<String>,
  #[arg(long)]
  pub company:                 String,
  #[arg(long)]
  pub job_title:               Option<String>,
  /// Application category token, e.g. `footwear`.
  #[arg(long)]
  pub category:                Option<String>,
  /// Product line id; repeat for several.
  #[arg(long = "product-line", value_name = "ID")]
  pub product_lines:           Vec<String>,
  #[arg(long)]
  pub project_description:     String,
  /// e.g. `1-3-months`.
  #[arg(long)]
  pub timeline:                Option<String>,
  /// e.g. `small-batch`.
  #[arg(long)]
  pub volume:                  Option<String>,
  #[arg(long)]
  pub additional_requirements: Option<String>,
  /// Accept the privacy policy.
  #[arg(long)]
  pub accept_privacy:          bool,
}

// ─── Filling ──────────────────────────────────────────────────────────────────

/// Apply every given flag as a field change. Absent optional flags keep the
/// form's defaults.
pub fn fill_contact<T: SubmissionTransport>(
  form: &mut FormController<ContactDraft, T>,
  args: ContactArgs,
) -> Result<()> {
  use ContactField as F;

  form.on_field_change(F::FirstName, args.first_name)?;
  form.on_field_change(F::LastName, args.last_name)?;
  form.on_field_change(F::Email, args.email)?;
  if let Some(phone) = args.phone {
    form.on_field_change(F::Phone, phone)?;
  }
  if let Some(company) = args.company {
    form.on_field_change(F::Company, company)?;
  }
  if let Some(area) = args.area {
    form.on_field_change(F::InterestedArea, area)?;
  }
  form.on_field_change(F::Message, args.message)?;
  form.on_field_change(F::PrivacyAccepted, args.accept_privacy)?;
  Ok(())
}

pub fn fill_sample<T: SubmissionTransport>(
  form: &mut FormController<SampleDraft, T>,
  args: SampleArgs,
) -> Result<()> {
  use SampleField as F;

  form.on_field_change(F::FirstName, args.first_name)?;
  form.on_field_change(F::LastName, args.last_name)?;
  form.on_field_change(F::Email, args.email)?;
  form.on_field_change(F::Company, args.company)?;
  form.on_field_change(F::ProductLines, args.product_lines)?;
  form.on_field_change(F::ProjectDescription, args.project_description)?;
  form.on_field_change(F::PrivacyAccepted, args.accept_privacy)?;

  let optional = [
    (F::Phone, args.phone),
    (F::JobTitle, args.job_title),
    (F::ApplicationCategory, args.category),
    (F::Timeline, args.timeline),
    (F::Volume, args.volume),
    (F::AdditionalRequirements, args.additional_requirements),
  ];
  for (field, value) in optional {
    if let Some(value) = value {
      form.on_field_change(field, value)?;
    }
  }
  Ok(())
}

// ─── Submitting ───────────────────────────────────────────────────────────────

/// Validate and post the form through the controller, writing inline errors
/// or the banner (plus a one-line summary on success) to `out`.
pub async fn submit<F, T>(
  form: &mut FormController<F, T>,
  summarize: impl Fn(&F::Data) -> String,
  out: &mut impl Write,
) -> Result<SubmitOutcome<F::Data>>
where
  F: Submittable,
  T: SubmissionTransport,
{
  let outcome = form.on_submit().await?;

  match &outcome {
    SubmitOutcome::Invalid => write_errors(form.errors(), out)?,
    SubmitOutcome::Busy => {}
    SubmitOutcome::Accepted(request) => {
      writeln!(out, "{}", form.status().message().unwrap_or_default())?;
      writeln!(out, "{}", summarize(request))?;
    }
    SubmitOutcome::Failed => {
      writeln!(out, "{}", form.status().message().unwrap_or_default())?;
    }
  }
  Ok(outcome)
}

pub fn write_errors<F>(errors: &FieldErrors<F>, out: &mut impl Write) -> Result<()>
where
  F: Copy + Ord + std::fmt::Display,
{
  for (field, message) in errors.iter() {
    writeln!(out, "  {field}: {message}")?;
  }
  Ok(())
}

pub fn contact_summary(request: &ContactRequest) -> String {
  let mut line = format!(
    "Sent for {} {} <{}>, interested in {}",
    request.first_name,
    request.last_name,
    request.email,
    request.interested_area.label(),
  );
  if !request.phone.is_empty() {
    line.push_str(&format!(", phone {}", format_phone_number(&request.phone)));
  }
  line
}

pub fn sample_summary(request: &SampleRequest) -> String {
  format!(
    "Requested {} for {} ({}), {}, {}",
    request.product_lines.join(", "),
    request.company,
    request.application_category.label(),
    request.timeline.label(),
    request.volume.label(),
  )
}

#[cfg(test)]
mod tests {
  use std::{net::TcpListener, sync::Arc};

  use thindown_core::status::StatusKind;
  use thindown_forms::{HttpTransport, TransportConfig};

  use super::*;

  /// A transport pointed at a port nothing listens on.
  fn dead_transport() -> Arc<HttpTransport> {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Arc::new(
      HttpTransport::new(TransportConfig {
        base_url: format!("http://{addr}"),
        ..TransportConfig::default()
      })
      .unwrap(),
    )
  }

  fn jane() -> ContactArgs {
    ContactArgs {
      first_name:     "Jane".into(),
      last_name:      "Doe".into(),
      email:          "jane@x.com".into(),
      phone:          Some("315-555-0199".into()),
      company:        None,
      area:           Some("military".into()),
      message:        "Please send me specs for your product line.".into(),
      accept_privacy: true,
    }
  }

  #[tokio::test]
  async fn invalid_contact_prints_field_errors() {
    let mut form = FormController::<ContactDraft, _>::new(dead_transport());
    fill_contact(&mut form, ContactArgs { accept_privacy: false, email: "jane".into(), ..jane() })
      .unwrap();

    let mut out = Vec::new();
    let outcome = submit(&mut form, contact_summary, &mut out).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "  email: Please enter a valid email address\n  \
       privacyAccepted: You must accept the privacy policy\n"
    );
  }

  #[tokio::test]
  async fn unreachable_site_prints_failure_banner() {
    let mut form = FormController::<ContactDraft, _>::new(dead_transport());
    fill_contact(&mut form, jane()).unwrap();

    let mut out = Vec::new();
    let outcome = submit(&mut form, contact_summary, &mut out).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.status().kind(), StatusKind::Error);
    assert_eq!(String::from_utf8(out).unwrap().trim_end(), ContactDraft::FAILURE_MESSAGE);
    assert_eq!(form.draft().first_name, "Jane");
  }

  #[test]
  fn sample_flags_fill_the_draft() {
    let mut form = FormController::<SampleDraft, _>::new(dead_transport());
    fill_sample(&mut form, SampleArgs {
      first_name:              "Jane".into(),
      last_name:               "Doe".into(),
      email:                   "jane@x.com".into(),
      phone:                   None,
      company:                 "Acme Outdoor".into(),
      job_title:               None,
      category:                Some("footwear".into()),
      product_lines:           vec!["thindown-flex".into(), "thindown-active".into()],
      project_description:     "Insulated boot liner for a winter line.".into(),
      timeline:                None,
      volume:                  Some("small-batch".into()),
      additional_requirements: None,
      accept_privacy:          true,
    })
    .unwrap();

    let draft = form.draft();
    assert_eq!(draft.application_category, "footwear");
    assert_eq!(draft.timeline, "immediate");
    assert_eq!(draft.volume, "small-batch");
    assert_eq!(draft.product_lines.len(), 2);
  }

  #[test]
  fn contact_summary_formats_phone() {
    let request = ContactDraft {
      first_name: "Jane".into(),
      last_name: "Doe".into(),
      email: "jane@x.com".into(),
      phone: "315-555-0199".into(),
      interested_area: "military".into(),
      message: "Please send me specs for your product line.".into(),
      privacy_accepted: true,
      ..ContactDraft::default()
    };
    let request = thindown_core::form::FormSchema::validate(&request).unwrap();
    assert_eq!(
      contact_summary(&request),
      "Sent for Jane Doe <jane@x.com>, interested in Military & Tactical, phone (315) 555-0199"
    );
  }
}
