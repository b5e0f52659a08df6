//! Random passcode generation.

use rand::Rng;

use crate::domain::entities::otp_record::CODE_LENGTH;

/// Generate a uniformly random 6-digit numeric code
///
/// Draws a uniform integer in `[0, 1_000_000)` and zero-pads it to
/// [`CODE_LENGTH`] digits. The thread-local RNG is seeded from the OS, so
/// consecutive calls in the same clock tick cannot collide the way a
/// wall-clock-seeded generator would.
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:0width$}", code, width = CODE_LENGTH)
}
