//! Conversions between core view models and Slint structs

use rideshare_core::view::{
    BookingConfirmation, ProfileView, RideCardView, StatusTone, VehicleCardView,
};
use rideshare_core::{AccountType, SignUpField, SignUpForm};

use crate::{BookingData, ProfileData, RideItem, SignUpData, SignUpErrors, VehicleItem};

pub fn profile_data(view: &ProfileView) -> ProfileData {
    ProfileData {
        name: view.name.as_str().into(),
        email: view.email.as_str().into(),
        account_type: view.account_type.as_str().into(),
        phone: view.phone.as_str().into(),
        member_since: view.member_since.as_str().into(),
    }
}

pub fn ride_item(card: &RideCardView) -> RideItem {
    RideItem {
        id: card.id.as_str().into(),
        origin: card.origin.as_str().into(),
        destination: card.destination.as_str().into(),
        date: card.date.as_str().into(),
        time: card.time.as_str().into(),
        price: card.price.as_str().into(),
        status: card.status.as_str().into(),
        completed: card.tone == StatusTone::Success,
    }
}

pub fn vehicle_item(card: &VehicleCardView) -> VehicleItem {
    VehicleItem {
        id: card.id as i32,
        title: card.title.as_str().into(),
        year: card.year.as_str().into(),
        category: card.category.as_str().into(),
        plate: card.plate.as_str().into(),
        stars: card.star_text().into(),
        rating: card.rating.as_str().into(),
        features: card.features.join(" · ").into(),
    }
}

pub fn booking_data(confirmation: &BookingConfirmation) -> BookingData {
    BookingData {
        origin: confirmation.origin.as_str().into(),
        destination: confirmation.destination.as_str().into(),
        booking_id: confirmation.booking_id.as_str().into(),
        estimated_cost: confirmation.estimated_cost.as_str().into(),
        footnote: BookingConfirmation::FOOTNOTE.into(),
    }
}

pub fn sign_up_form(data: &SignUpData) -> SignUpForm {
    SignUpForm {
        first_name: data.first_name.to_string(),
        last_name: data.last_name.to_string(),
        email: data.email.to_string(),
        phone: data.phone.to_string(),
        password: data.password.to_string(),
        confirm_password: data.confirm_password.to_string(),
        account_type: AccountType::from_form_value(&data.account_type),
        agree_terms: data.agree_terms,
    }
}

/// Flags for the fields to highlight
pub fn sign_up_errors(fields: &[SignUpField]) -> SignUpErrors {
    let mut errors = SignUpErrors::default();
    for field in fields {
        match field {
            SignUpField::FirstName => errors.first_name = true,
            SignUpField::LastName => errors.last_name = true,
            SignUpField::Email => errors.email = true,
            SignUpField::Phone => errors.phone = true,
            SignUpField::Password => errors.password = true,
            SignUpField::ConfirmPassword => errors.confirm_password = true,
            SignUpField::AgreeTerms => errors.agree_terms = true,
        }
    }
    errors
}
