//! Endpoint functions related to tracks

use crate::model::track::*;
use crate::spotify::*;

pub struct Tracks<'a>(pub &'a Spotify);

impl Tracks<'_> {
    pub async fn get(&self, id: &str) -> ApiResult<Track> {
        let url = format!("/v1/tracks/{}", id);
        let result = self.0.get(&url).await?;
        Spotify::convert_result::<Track>(&result)
    }
}
