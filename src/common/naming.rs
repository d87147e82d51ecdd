use uuid::Uuid;

pub const JOB_NAME_PREFIX: &str = "amsv3function-job";

/// `<prefix>-<uuid v4>`; the random suffix keeps names unique.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub fn job_name() -> String {
    unique_name(JOB_NAME_PREFIX)
}

/// Asset id in the `nb:cid:UUID:` form used by the v2 API.
pub fn legacy_asset_id(asset_id: &Uuid) -> String {
    format!("nb:cid:UUID:{}", asset_id)
}

pub fn legacy_container_name(asset_id: &Uuid) -> String {
    format!("asset-{}", asset_id)
}
