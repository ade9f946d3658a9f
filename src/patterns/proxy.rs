use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Something that can fetch a URL
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> String;
}

/// Simulated network client
#[derive(Debug, Default)]
pub struct NetworkFetcher {
    requests: usize,
}

impl NetworkFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests that reached the network
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl Fetch for NetworkFetcher {
    fn fetch(&mut self, url: &str) -> String {
        self.requests += 1;
        format!("{} - Response from network", url)
    }
}

/// Forwards the first request for each URL to its target and answers repeats itself
#[derive(Debug)]
pub struct CachingFetchProxy<F> {
    target: F,
    cache: HashSet<String>,
    hits: usize,
    misses: usize,
}

impl<F: Fetch> CachingFetchProxy<F> {
    pub fn new(target: F) -> Self {
        Self {
            target,
            cache: HashSet::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn target(&self) -> &F {
        &self.target
    }

    /// URLs seen so far, sorted
    pub fn cached_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.cache.iter().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl<F: Fetch> Fetch for CachingFetchProxy<F> {
    fn fetch(&mut self, url: &str) -> String {
        if self.cache.contains(url) {
            self.hits += 1;
            debug!("Cache hit for {}", url);
            return format!("{} - Response from cache", url);
        }

        self.misses += 1;
        debug!("Cache miss for {}", url);
        self.cache.insert(url.to_string());
        self.target.fetch(url)
    }
}

/// Base URLs for profile and banner images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageEndpoints {
    pub profile_base: String,
    pub banner_base: String,
}

impl Default for ImageEndpoints {
    fn default() -> Self {
        Self {
            profile_base: "https://images.example.com/profile/".to_string(),
            banner_base: "https://images.example.com/banner/".to_string(),
        }
    }
}

/// Image lookups shared by every caller through one fetcher
pub struct ImageService<F> {
    fetcher: F,
    endpoints: ImageEndpoints,
}

impl<F: Fetch> ImageService<F> {
    pub fn new(fetcher: F, endpoints: ImageEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn profile_images(&mut self, profile_id: &str) -> String {
        let url = format!("{}{}", self.endpoints.profile_base, profile_id);
        self.fetcher.fetch(&url)
    }

    pub fn banner_images(&mut self, profile_id: &str) -> String {
        let url = format!("{}{}", self.endpoints.banner_base, profile_id);
        self.fetcher.fetch(&url)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
