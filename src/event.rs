use serde::Deserialize;

use crate::auction::Event;

/// Wire event kinds the formatter knows how to render. Anything else is
/// `Other` and produces no output, so newer server-side kinds never break
/// an older client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BidValidated,
    AuctionWon,
    PaymentLink,
    PaymentStatus,
    Other,
}

impl EventKind {
    pub fn parse(raw: &str) -> EventKind {
        match raw {
            "bid_validated" => EventKind::BidValidated,
            "auction_won" => EventKind::AuctionWon,
            "payment_link" => EventKind::PaymentLink,
            "payment_status" => EventKind::PaymentStatus,
            _ => EventKind::Other,
        }
    }
}

// Each kind carries its own payload shape; field names are verbatim from the
// producing backend. Every field is optional so a short payload renders with
// a "?" instead of failing the stream.

#[derive(Deserialize, Default)]
struct BidPayload {
    #[serde(rename = "valor do lance")]
    bid_value: Option<f64>,
}

#[derive(Deserialize, Default)]
struct WinnerPayload {
    #[serde(rename = "valor negociado")]
    final_value: Option<f64>,
}

#[derive(Deserialize, Default)]
struct LinkPayload {
    link: Option<String>,
}

#[derive(Deserialize, Default)]
struct StatusPayload {
    status_final: Option<String>,
}

fn decode<T: Default + for<'de> Deserialize<'de>>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_default()
}

fn fmt_num(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "?".to_string(),
    }
}

fn fmt_str(value: Option<String>) -> String {
    value.unwrap_or_else(|| "?".to_string())
}

/// Renders one display line per recognized event, or `None` for unknown
/// kinds. Never assumes a field belonging to one kind exists for another.
pub fn render_event(event: &Event) -> Option<String> {
    match EventKind::parse(&event.event_type) {
        EventKind::BidValidated => {
            let payload: BidPayload = decode(&event.extra_payload);
            Some(format!(
                "[NEW BID] auction {}: {} (user: {})",
                event.auction_id,
                fmt_num(payload.bid_value),
                event.user_id,
            ))
        }
        EventKind::AuctionWon => {
            let payload: WinnerPayload = decode(&event.extra_payload);
            Some(format!(
                "[AUCTION CLOSED] winner: {} | value: {}",
                event.user_id,
                fmt_num(payload.final_value),
            ))
        }
        EventKind::PaymentLink => {
            let payload: LinkPayload = decode(&event.extra_payload);
            Some(format!("[!!!] PAYMENT: {}", fmt_str(payload.link)))
        }
        EventKind::PaymentStatus => {
            let payload: StatusPayload = decode(&event.extra_payload);
            Some(format!("[$$$] STATUS: {}", fmt_str(payload.status_final)))
        }
        EventKind::Other => None,
    }
}
