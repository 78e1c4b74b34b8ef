use rand::seq::SliceRandom;
use rand::Rng;
use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Video shown after a gift is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReward {
    pub id: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default)]
pub struct RewardPicker {
    rewards: Vec<VideoReward>,
}

impl RewardPicker {
    pub fn new(videos: &[String]) -> Result<Self, url::ParseError> {
        let rewards = videos
            .iter()
            .map(|v| normalize_video_id(v))
            .filter(|id| !id.is_empty())
            .map(|id| embed_url(&id).map(|url| VideoReward { id, url }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rewards })
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&VideoReward> {
        self.rewards.choose(rng)
    }
}

/// Reduce a watch URL, short link or bare id to the bare video id.
pub fn normalize_video_id(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(parsed) = Url::parse(raw) {
        if let Some((_, v)) = parsed.query_pairs().find(|(k, _)| k == "v") {
            return v.into_owned();
        }
        if let Some(last) = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        {
            return last.to_string();
        }
    }

    // scheme-less input, e.g. "youtu.be/abc?t=3"
    let tail = match raw.split_once("v=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or(rest),
        None => raw.rsplit('/').next().unwrap_or(raw),
    };
    tail.split('?').next().unwrap_or(tail).to_string()
}

pub fn embed_url(video_id: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(EMBED_BASE)?.join(video_id)?;
    url.query_pairs_mut()
        .append_pair("autoplay", "1")
        .append_pair("mute", "1")
        .append_pair("rel", "0")
        .append_pair("modestbranding", "1")
        .append_pair("enablejsapi", "1");
    Ok(url)
}
