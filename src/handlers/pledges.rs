use crate::{
    models::pledge::Pledge,
    requests::pledge::PledgeForm,
    services::{
        card::{CardError, CardRenderer},
        ledger::{Ledger, LedgerError},
    },
    utils::pages,
};
use actix_web::{
    HttpResponse, Result,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web,
};
use chrono::Local;
use tracing::{error, info, warn};

pub async fn form() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::pledge_form(None)))
}

pub async fn submit(
    form: web::Form<PledgeForm>,
    ledger: web::Data<Ledger>,
    renderer: web::Data<CardRenderer>,
) -> Result<HttpResponse> {
    let pledge = match Pledge::try_from(form.into_inner()) {
        Ok(pledge) => pledge,
        Err(e) => {
            info!("Rejected pledge submission: {}", e);
            return Ok(HttpResponse::BadRequest()
                .content_type("text/html; charset=utf-8")
                .body(pages::pledge_form(Some("All fields are required."))));
        }
    };

    info!("Recording pledge from {}", pledge.name);

    // Ledger failures are logged with their kind and swallowed: the pledger
    // still gets a card.
    let row = pledge.ledger_row(Local::now());
    match ledger.append(&row).await {
        Ok(()) => info!("Appended ledger row for {}", pledge.name),
        Err(LedgerError::Disabled) => {
            warn!("Ledger disabled; pledge from {} was not recorded", pledge.name)
        }
        Err(e) => error!("Failed to append ledger row for {}: {}", pledge.name, e),
    }

    match renderer.render(&pledge.name, &pledge.amount) {
        Ok(png) => Ok(HttpResponse::Ok()
            .content_type("image/png")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(pledge.attachment_filename())],
            })
            .body(png)),
        Err(CardError::TemplateMissing { path }) => {
            error!("Card template missing: {}", path.display());
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(pages::pledge_form(Some(
                    "Failed to create card. The template image file was not found.",
                ))))
        }
        Err(e) => {
            error!("Failed to render pledge card: {}", e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(pages::pledge_form(Some(
                    "Failed to create card. Please try again.",
                ))))
        }
    }
}
