//! SMTP delivery of the rendered report.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::MailConfig;

type MailError = Box<dyn std::error::Error + Send + Sync>;

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    receivers: Vec<Mailbox>,
}

impl Mailer {
    /// Build an authenticated TLS transport from the mail configuration.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(Credentials::new(
                config.sender.clone(),
                config.password.clone(),
            ))
            .build();

        let sender: Mailbox = config.sender.parse()?;
        let receivers = config
            .receivers
            .iter()
            .map(|r| r.parse::<Mailbox>())
            .collect::<Result<Vec<_>, _>>()?;
        if receivers.is_empty() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no mail receivers configured",
            )));
        }

        Ok(Self {
            transport,
            sender,
            receivers,
        })
    }

    pub async fn send_html(&self, subject: &str, html: String) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);
        for receiver in &self.receivers {
            builder = builder.to(receiver.clone());
        }
        let message = builder.body(html)?;

        self.transport.send(message).await?;
        info!(
            subject = %subject,
            receivers = self.receivers.len(),
            "report mailed to {} receivers",
            self.receivers.len()
        );
        Ok(())
    }
}
