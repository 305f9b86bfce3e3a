//! Markup fragments
//!
//! Every embedded text value passes through [`escape_html`], including
//! values that come from the fixed catalog.

use super::{
    AuthView, BookingConfirmation, Notice, ProfileView, RideCardView, StatusTone, VehicleCardView,
};
use crate::models::{RideRecord, UserProfile, VehicleListing};

/// Escape `&`, `<`, `>`, `"` and `'`
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    format!(
        r#"<div class="alert alert-{}">{}</div>"#,
        notice.level.as_str(),
        escape_html(&notice.text)
    )
}

/// Header greeting or sign-in links
pub fn render_auth_area(profile: Option<&UserProfile>) -> String {
    match AuthView::from_session(profile) {
        AuthView::Authenticated {
            greeting_name,
            badge,
        } => format!(
            concat!(
                r#"<div class="user-info">"#,
                r#"<span class="user-greeting">Hi, <strong>{}</strong></span>"#,
                r#"<small class="user-type-badge badge-{}">{}</small>"#,
                r#"<a class="btn btn-profile" href="profile">Profile</a>"#,
                r#"<button class="btn btn-sign-out">Sign Out</button>"#,
                "</div>"
            ),
            escape_html(&greeting_name),
            escape_html(&badge.to_ascii_lowercase()),
            escape_html(&badge),
        ),
        AuthView::Anonymous => concat!(
            r#"<div class="auth-buttons">"#,
            r#"<a class="btn btn-login" href="login">Login</a>"#,
            r#"<a class="btn btn-sign-up" href="signup">Sign Up</a>"#,
            "</div>"
        )
        .to_string(),
    }
}

/// Profile details, or a sign-in prompt when nobody is signed in
pub fn render_profile(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return concat!(
            r#"<div class="alert alert-warning">"#,
            r#"You are not signed in. <a href="login" class="alert-link">Sign in</a> to view your profile."#,
            "</div>"
        )
        .to_string();
    };

    let view = ProfileView::new(profile);
    let mut out = String::from(r#"<div class="profile-details">"#);
    for (label, value) in [
        ("Full Name", &view.name),
        ("Email", &view.email),
        ("Account Type", &view.account_type),
        ("Phone", &view.phone),
        ("Member Since", &view.member_since),
    ] {
        out.push_str(&format!(
            r#"<div class="detail-item"><label>{}:</label><span>{}</span></div>"#,
            label,
            escape_html(value)
        ));
    }
    out.push_str("</div>");
    out
}

fn render_ride_card(card: &RideCardView) -> String {
    let (tone, icon) = match card.tone {
        StatusTone::Success => ("success", "check-circle"),
        StatusTone::Warning => ("warning", "clock"),
    };
    format!(
        concat!(
            r#"<div class="card ride-card">"#,
            r#"<div class="ride-route">"#,
            r#"<div class="route-item route-from"><strong>{origin}</strong></div>"#,
            r#"<div class="route-item route-to"><strong>{destination}</strong></div>"#,
            "</div>",
            r#"<div class="ride-details">"#,
            r#"<small>Ride ID: {id}</small><div>{date}</div><div>{time}</div>"#,
            "</div>",
            r#"<div class="ride-status">"#,
            r#"<div class="price-tag">{price}</div>"#,
            r#"<span class="badge badge-{tone}" data-icon="{icon}">{status}</span>"#,
            "</div>",
            "</div>"
        ),
        origin = escape_html(&card.origin),
        destination = escape_html(&card.destination),
        id = escape_html(&card.id),
        date = escape_html(&card.date),
        time = escape_html(&card.time),
        price = escape_html(&card.price),
        tone = tone,
        icon = icon,
        status = escape_html(&card.status),
    )
}

/// Ride history cards, or the empty state
pub fn render_rides(rides: &[RideRecord]) -> String {
    if rides.is_empty() {
        return concat!(
            r#"<div class="rides-empty">"#,
            "<h5>No rides yet</h5>",
            "<p>Book your first ride to see your history here.</p>",
            "</div>"
        )
        .to_string();
    }

    rides
        .iter()
        .map(|ride| render_ride_card(&RideCardView::new(ride)))
        .collect()
}

fn render_vehicle_card(card: &VehicleCardView) -> String {
    let features: String = card
        .features
        .iter()
        .map(|f| format!(r#"<span class="badge badge-light">{}</span>"#, escape_html(f)))
        .collect();
    format!(
        concat!(
            r#"<div class="card car-card" data-vehicle-id="{id}">"#,
            r#"<img src="{image}" alt="{title}">"#,
            r#"<h5 class="card-title">{title}</h5>"#,
            r#"<div class="detail-row"><span>Year:</span><span>{year}</span></div>"#,
            r#"<div class="detail-row"><span>Type:</span><span class="badge">{category}</span></div>"#,
            r#"<div class="detail-row"><span>Plate:</span><span>{plate}</span></div>"#,
            r#"<div class="detail-row"><span>Rating:</span><span>{stars} {rating}</span></div>"#,
            r#"<div class="car-features">{features}</div>"#,
            r#"<button class="btn btn-select-vehicle">Select Vehicle</button>"#,
            "</div>"
        ),
        id = card.id,
        image = escape_html(&card.image_url),
        title = escape_html(&card.title),
        year = escape_html(&card.year),
        category = escape_html(&card.category),
        plate = escape_html(&card.plate),
        stars = escape_html(&card.star_text()),
        rating = escape_html(&card.rating),
        features = features,
    )
}

/// Vehicle catalog cards, or a notice when there are none
pub fn render_vehicles(vehicles: &[VehicleListing]) -> String {
    if vehicles.is_empty() {
        return render_notice(&Notice::info("No vehicles available at the moment."));
    }

    vehicles
        .iter()
        .map(|v| render_vehicle_card(&VehicleCardView::new(v)))
        .collect()
}

/// Success panel shown after booking
pub fn render_booking_confirmation(ride: &RideRecord) -> String {
    let view = BookingConfirmation::new(ride);
    format!(
        concat!(
            r#"<div class="alert alert-success">"#,
            "<h6>Ride Booked Successfully!</h6>",
            r#"<div class="booking-details">"#,
            "<p><strong>From:</strong> {}</p>",
            "<p><strong>To:</strong> {}</p>",
            "<p><strong>Booking ID:</strong> {}</p>",
            "<p><strong>Estimated Cost:</strong> {}</p>",
            "</div>",
            "<small>{}</small>",
            "</div>"
        ),
        escape_html(&view.origin),
        escape_html(&view.destination),
        escape_html(&view.booking_id),
        escape_html(&view.estimated_cost),
        escape_html(BookingConfirmation::FOOTNOTE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::vehicle_catalog;
    use crate::models::AccountType;

    fn hostile_ride() -> RideRecord {
        RideRecord::confirmed(
            "<b>ID</b>".into(),
            "<script>x</script>".into(),
            "Tom & Jerry's \"place\"".into(),
            20,
            "jane@x.com".into(),
        )
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Maadi"), "Maadi");
    }

    #[test]
    fn ride_card_never_contains_live_tags() {
        let html = render_rides(&[hostile_ride()]);
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Tom &amp; Jerry&#039;s &quot;place&quot;"));
        assert!(html.contains("&lt;b&gt;ID&lt;/b&gt;"));
        assert!(html.contains("badge-warning"));
    }

    #[test]
    fn booking_confirmation_is_escaped() {
        let html = render_booking_confirmation(&hostile_ride());
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("$20"));
    }

    #[test]
    fn auth_area_escapes_name() {
        let mut profile = UserProfile::new("x@y.zz".into(), AccountType::Driver);
        profile.display_name = Some("<img onerror=1>".into());
        let html = render_auth_area(Some(&profile));
        assert!(html.contains("Hi, <strong>&lt;img onerror=1&gt;</strong>"));
        assert!(html.contains("badge-driver"));

        let anonymous = render_auth_area(None);
        assert!(anonymous.contains("Login"));
        assert!(anonymous.contains("Sign Up"));
    }

    #[test]
    fn profile_renders_prompt_or_details() {
        assert!(render_profile(None).contains("You are not signed in."));

        let mut profile = UserProfile::new("o'brien@x.com".into(), AccountType::Passenger);
        profile.phone = Some("555 <0100>".into());
        let html = render_profile(Some(&profile));
        assert!(html.contains("o&#039;brien@x.com"));
        assert!(html.contains("555 &lt;0100&gt;"));
        assert!(html.contains("Passenger"));
    }

    #[test]
    fn empty_collections_have_their_own_states() {
        assert!(render_rides(&[]).contains("No rides yet"));
        assert!(render_vehicles(&[]).contains("No vehicles available at the moment."));
    }

    #[test]
    fn vehicle_cards_list_features() {
        let html = render_vehicles(&vehicle_catalog());
        assert_eq!(html.matches(r#"class="card car-card""#).count(), 3);
        assert!(html.contains("Premium Sound"));
        assert!(html.contains("ABC-1234"));
        assert!(html.contains("&amp;auto=compress"));
    }

    #[test]
    fn notice_text_is_escaped() {
        let html = render_notice(&Notice::danger("<oops>"));
        assert_eq!(html, r#"<div class="alert alert-danger">&lt;oops&gt;</div>"#);
    }
}
