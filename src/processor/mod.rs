pub mod award_processor;
