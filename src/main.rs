use anyhow::Result;
use clinic_kiosk::config::Config;
use clinic_kiosk::controller::{RegistrationFormController, SubmitStart, Submission};
use clinic_kiosk::i18n::Locale;
use clinic_kiosk::registration::{RegistrationResult, SubmitError};
use clinic_kiosk::view::{Field, KioskScreen, Surface};
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

type PendingRequest = Pin<Box<dyn Future<Output = Result<RegistrationResult, SubmitError>>>>;

const HELP: &str = "Commands: name <text> | phone <text> | age <text> | submit | \
                    lang en|mr | reset | help | quit";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Set(Field, &'a str),
    Submit,
    Language(&'a str),
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "name" => Some(Command::Set(Field::Name, rest)),
        "phone" => Some(Command::Set(Field::Phone, rest)),
        "age" => Some(Command::Set(Field::Age, rest)),
        "submit" => Some(Command::Submit),
        "lang" => Some(Command::Language(rest)),
        "reset" => Some(Command::Reset),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn draw(controller: &mut RegistrationFormController<KioskScreen>) {
    let screen = controller.surface_mut();
    println!("\n{}\n", screen.render());
    for alert in screen.take_alerts() {
        println!("!! {}\n", alert);
    }
}

fn start(submission: Submission) -> PendingRequest {
    Box::pin(submission.send())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the deployment)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the kiosk screen on stdout stays readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_kiosk=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Starting clinic kiosk against {}", config.endpoint_url);

    let mut controller = RegistrationFormController::from_config(&config, KioskScreen::new());
    controller.initialize(config.language_preference.as_deref());

    println!("{}", HELP);
    draw(&mut controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingRequest> = None;

    loop {
        tokio::select! {
            result = async {
                match pending.as_mut() {
                    Some(request) => request.await,
                    None => std::future::pending().await,
                }
            } => {
                pending = None;
                controller.finish_submit(result).await;
                draw(&mut controller);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(Command::Set(field, value)) => {
                        controller.surface_mut().set_field(field, value)
                    }
                    Some(Command::Submit) => {
                        let input = controller.surface().form_input();
                        if let SubmitStart::Started(submission) = controller.begin_submit(input) {
                            pending = Some(start(submission));
                        }
                    }
                    Some(Command::Language(code)) => match Locale::from_code(code) {
                        Ok(locale) => controller.set_language(locale),
                        Err(e) => warn!("{}", e),
                    },
                    Some(Command::Reset) => {
                        controller.reset_view().await;
                    }
                    Some(Command::Help) => println!("{}", HELP),
                    Some(Command::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => println!("{}", HELP),
                }
                draw(&mut controller);
            }
        }
    }

    if pending.is_some() {
        warn!("Exiting with a registration request still in flight");
    }
    info!("Clinic kiosk stopped");
    Ok(())
}
