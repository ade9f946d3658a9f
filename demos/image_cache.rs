use patternkit::patterns::proxy::{CachingFetchProxy, ImageEndpoints, ImageService, NetworkFetcher};

fn main() {
    patternkit::logging::init();

    let proxy = CachingFetchProxy::new(NetworkFetcher::new());
    let mut images = ImageService::new(proxy, ImageEndpoints::default());

    println!("{}", images.profile_images("1001"));
    println!("{}", images.banner_images("1001"));
    println!("{}", images.profile_images("1001"));

    let proxy = images.fetcher();
    log::info!("Cache hits: {}, misses: {}", proxy.hits(), proxy.misses());
}
