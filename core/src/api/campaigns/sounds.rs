use std::sync::Arc;

use super::model::{CampaignSound, FindSoundsRequest, TextToSpeech};
use crate::api::common::Page;
use crate::api::fields_query;
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const SOUNDS_PATH: &str = "/campaigns/sounds";
const SOUNDS_ITEM_PATH: &str = "/campaigns/sounds/{}";
const SOUNDS_ITEM_MP3_PATH: &str = "/campaigns/sounds/{}.mp3";
const SOUNDS_ITEM_WAV_PATH: &str = "/campaigns/sounds/{}.wav";
const SOUNDS_TTS_PATH: &str = "/campaigns/sounds/tts";

/// Sounds used by call and IVR broadcasts.
#[derive(Debug, Clone)]
pub struct CampaignSoundsApi {
    client: Arc<RestApiClient>,
}

impl CampaignSoundsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindSoundsRequest) -> Result<Page<CampaignSound>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(SOUNDS_PATH, ModelType::page_of::<CampaignSound>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<CampaignSound> {
        let path = replace_placeholder(SOUNDS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<CampaignSound>()?, &fields_query(fields))
    }

    pub fn get_mp3(&self, id: i64) -> Result<Vec<u8>> {
        let path = replace_placeholder(SOUNDS_ITEM_MP3_PATH, &id.to_string())?;
        self.client.get(&path, ModelType::stream(), &[])
    }

    pub fn get_wav(&self, id: i64) -> Result<Vec<u8>> {
        let path = replace_placeholder(SOUNDS_ITEM_WAV_PATH, &id.to_string())?;
        self.client.get(&path, ModelType::stream(), &[])
    }

    /// Generate a sound from text.
    pub fn create_from_tts(
        &self,
        tts: &TextToSpeech,
        fields: Option<&str>,
    ) -> Result<CampaignSound> {
        self.client.post(
            SOUNDS_TTS_PATH,
            ModelType::of::<CampaignSound>()?,
            Some(tts),
            &fields_query(fields),
        )
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(SOUNDS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::campaigns::SoundStatus;
    use crate::http::HttpMethod;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn find_sounds() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"id":1,"name":"welcome","status":"ACTIVE","lengthInSeconds":4}]}"#,
        );
        let request = FindSoundsRequest::builder()
            .filter("welcome")
            .include_archived(false)
            .build();
        let page = test_client(&transport)
            .campaign_sounds_api()
            .find(&request)
            .unwrap();
        assert_eq!(page.items[0].status, Some(SoundStatus::Active));
        assert_eq!(
            transport.last_request().query,
            vec![
                ("filter".to_string(), "welcome".to_string()),
                ("includeArchived".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn tts_then_download() {
        let transport = MockTransport::respond(200, r#"{"id":5,"status":"ACTIVE"}"#);
        transport.push(200, b"RIFF".to_vec());
        let api = test_client(&transport).campaign_sounds_api();

        let mut tts = TextToSpeech::new("Hello from the broadcast");
        tts.voice = Some("FEMALE1".to_string());
        let sound = api.create_from_tts(&tts, None).unwrap();
        assert_eq!(sound.id, Some(5));
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.test/v2/campaigns/sounds/tts");

        let wav = api.get_wav(5).unwrap();
        assert_eq!(wav, b"RIFF".to_vec());
        assert_eq!(
            transport.last_request().url,
            "https://api.test/v2/campaigns/sounds/5.wav"
        );
    }

    #[test]
    fn mp3_and_delete() {
        let transport = MockTransport::respond(200, b"ID3".to_vec());
        let api = test_client(&transport).campaign_sounds_api();
        assert_eq!(api.get_mp3(5).unwrap(), b"ID3".to_vec());
        api.delete(5).unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.test/v2/campaigns/sounds/5");
    }
}
