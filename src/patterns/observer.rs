use crate::core::types::SubscriptionId;
use log::debug;

/// Receives tweets from a [`TweetProducer`]
pub trait Subscriber {
    fn name(&self) -> &str;

    /// Record a tweet and return the line describing the delivery
    fn add_to_feed(&mut self, tweet: &str) -> String;

    /// Tweets received so far, oldest first
    fn feed(&self) -> &[String];
}

/// Subscriber that keeps every tweet it receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follower {
    name: String,
    feed: Vec<String>,
}

impl Follower {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feed: Vec::new(),
        }
    }
}

impl Subscriber for Follower {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to_feed(&mut self, tweet: &str) -> String {
        self.feed.push(tweet.to_string());
        format!("{} sees \"{}\"", self.name, tweet)
    }

    fn feed(&self) -> &[String] {
        &self.feed
    }
}

/// Publishes tweets to every current subscriber, in subscription order
#[derive(Default)]
pub struct TweetProducer {
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
}

impl TweetProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a subscriber and return the handle used to detach it
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId::new();
        debug!("{} subscribed as {}", subscriber.name(), id);
        self.subscribers.push((id, subscriber));
        id
    }

    /// Detach a subscriber, handing it back to the caller
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Box<dyn Subscriber>> {
        let index = self.subscribers.iter().position(|(sub_id, _)| *sub_id == id)?;
        let (_, subscriber) = self.subscribers.remove(index);
        debug!("{} unsubscribed", subscriber.name());
        Some(subscriber)
    }

    /// Deliver a tweet and collect each subscriber's delivery line
    pub fn tweet(&mut self, tweet: &str) -> Vec<String> {
        self.subscribers
            .iter_mut()
            .map(|(_, subscriber)| subscriber.add_to_feed(tweet))
            .collect()
    }

    pub fn subscriber(&self, id: SubscriptionId) -> Option<&dyn Subscriber> {
        self.subscribers
            .iter()
            .find(|(sub_id, _)| *sub_id == id)
            .map(|(_, subscriber)| subscriber.as_ref())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_reaches_subscribers_in_order() {
        let mut celebrity = TweetProducer::new();
        celebrity.subscribe(Box::new(Follower::new("James")));
        celebrity.subscribe(Box::new(Follower::new("Jack")));
        celebrity.subscribe(Box::new(Follower::new("Jones")));

        let lines = celebrity.tweet("hello everyone!");
        assert_eq!(
            lines,
            vec![
                "James sees \"hello everyone!\"",
                "Jack sees \"hello everyone!\"",
                "Jones sees \"hello everyone!\"",
            ]
        );
    }

    #[test]
    fn test_unsubscribed_follower_misses_later_tweets() {
        let mut celebrity = TweetProducer::new();
        let james = celebrity.subscribe(Box::new(Follower::new("James")));
        let jack = celebrity.subscribe(Box::new(Follower::new("Jack")));

        celebrity.tweet("first");
        let james = celebrity.unsubscribe(james).unwrap();
        let lines = celebrity.tweet("second");

        assert_eq!(lines, vec!["Jack sees \"second\""]);
        assert_eq!(james.feed(), ["first".to_string()]);
        assert_eq!(
            celebrity.subscriber(jack).unwrap().feed(),
            ["first".to_string(), "second".to_string()]
        );
        assert_eq!(celebrity.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut celebrity = TweetProducer::new();
        celebrity.subscribe(Box::new(Follower::new("James")));
        let stranger = SubscriptionId::new();
        assert_eq!(stranger.uuid().get_version_num(), 4);
        assert_eq!(stranger.to_string(), stranger.uuid().to_string());
        assert!(celebrity.unsubscribe(stranger).is_none());
        assert_eq!(celebrity.subscriber_count(), 1);
    }
}
