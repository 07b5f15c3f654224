pub(crate) mod clock {
    #[cfg(test)]
    pub(crate) use super::mock::now;
    #[cfg(not(test))]
    pub(crate) use super::system_now as now;
}

#[cfg(not(test))]
pub(crate) fn system_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
