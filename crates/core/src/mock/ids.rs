//! Ride identifiers and fare estimates
//!
//! Both use the thread RNG. Neither is fit for real identifiers or billing.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated ride ids
pub const RIDE_ID_LEN: usize = 9;

/// Lowest and highest fare estimate, inclusive
pub const MIN_FARE: u32 = 15;
pub const MAX_FARE: u32 = 64;

/// Short uppercase base-36 token
pub fn generate_ride_id() -> String {
    let mut rng = rand::thread_rng();
    (0..RIDE_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Ride id not already present in `taken`
pub fn generate_unique_ride_id<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = taken.into_iter().collect();
    loop {
        let id = generate_ride_id();
        if !taken.contains(&id.as_str()) {
            return id;
        }
    }
}

/// Uniform fare estimate in whole dollars
pub fn estimate_fare() -> u32 {
    rand::thread_rng().gen_range(MIN_FARE..=MAX_FARE)
}
