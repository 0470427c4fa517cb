/// Address that receives demo requests. Override at build time with `CONTACT_EMAIL`.
pub fn get_contact_email() -> &'static str {
    option_env!("CONTACT_EMAIL").unwrap_or("russ.barnett@icloud.com")
}

/// How the site names itself in the body of a demo request email.
pub fn get_site_name() -> &'static str {
    option_env!("SITE_NAME").unwrap_or("BrandStudios.AI website")
}

/// Time the demo form shows its confirmation before resetting and closing.
pub const RESET_DELAY_MS: u32 = 2_000;
