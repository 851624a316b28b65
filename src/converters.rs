pub mod offer_converters;
