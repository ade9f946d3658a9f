use patternkit::patterns::observer::{Follower, TweetProducer};

fn main() {
    patternkit::logging::init();

    let mut celebrity = TweetProducer::new();
    let james = celebrity.subscribe(Box::new(Follower::new("James")));
    celebrity.subscribe(Box::new(Follower::new("Jack")));
    celebrity.subscribe(Box::new(Follower::new("Jones")));

    for line in celebrity.tweet("hello everyone!") {
        println!("{}", line);
    }

    celebrity.unsubscribe(james);

    for line in celebrity.tweet("what are you looking forward to?") {
        println!("{}", line);
    }
}
