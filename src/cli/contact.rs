use anyhow::Result;
use clap::Args;
use tooniq_form::{ContactForm, Field, HttpTransport};

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// One of general, product, consulting, development, partnership, other
    #[arg(long, default_value = "general")]
    pub category: String,
    /// Overrides `form.endpoint`
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Submits one inquiry through the same controller the site's form follows.
pub async fn send(config: crate::config::Config, args: SendArgs) -> Result<()> {
    let endpoint = args.endpoint.unwrap_or(config.form.endpoint.to_owned());
    let transport = HttpTransport::new(endpoint, config.form.timeout())?;
    let options = config.form.options(&config.email.contact_address);

    let mut form = ContactForm::new(transport, options);
    form.update_field(Field::Name, args.name);
    form.update_field(Field::Company, args.company);
    form.update_field(Field::Email, args.email);
    form.update_field(Field::Phone, args.phone);
    form.update_field(Field::Category, args.category);
    form.update_field(Field::Message, args.message);

    form.submit().await?;
    form.teardown();

    tracing::info!("Contact submission accepted");

    Ok(())
}
