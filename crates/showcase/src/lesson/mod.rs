mod basics;
mod chaining;
mod classes;
mod parameters;
mod properties;
mod return_values;

use crate::Options;
use clap::ValueEnum;
use micro_decor::DecorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lesson {
    Basics,
    Parameters,
    Chaining,
    ReturnValues,
    Classes,
    Properties,
    All,
}

impl Lesson {
    const EVERY: [Lesson; 6] =
        [Lesson::Basics, Lesson::Parameters, Lesson::Chaining, Lesson::ReturnValues, Lesson::Classes, Lesson::Properties];

    pub fn expand(self) -> Vec<Lesson> {
        match self {
            Lesson::All => Self::EVERY.to_vec(),
            lesson => vec![lesson],
        }
    }

    pub fn run(self, options: &Options) -> Result<(), DecorError> {
        match self {
            Lesson::Basics => basics::run(),
            Lesson::Parameters => parameters::run(options.times),
            Lesson::Chaining => chaining::run(),
            Lesson::ReturnValues => return_values::run(),
            Lesson::Classes => classes::run(),
            Lesson::Properties => properties::run(),
            Lesson::All => Self::EVERY.iter().try_for_each(|lesson| lesson.run(options)),
        }
    }
}
