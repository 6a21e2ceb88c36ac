use pullseq_core::{Never, PullSource, Step};
use pullseq_rand::Randomness;

/// Source with no length known in advance: every advance first rolls the
/// injected randomness, and a sample above the halt threshold ends the
/// source permanently. Below it, the generator produces the next item.
pub struct RandomHaltSource<G, R> {
    generate: G,
    rng: R,
    halt_threshold: f64,
    halted: bool,
}

impl<G, R> RandomHaltSource<G, R> {
    pub fn new(rng: R, halt_threshold: f64, generate: G) -> Self {
        Self {
            generate,
            rng,
            halt_threshold,
            halted: false,
        }
    }
}

impl<T, G, R> PullSource for RandomHaltSource<G, R>
where
    G: FnMut(&mut R) -> T,
    R: Randomness,
{
    type Item = T;
    type Error = Never;

    fn advance(&mut self) -> Step<T> {
        if self.halted {
            return Step::End;
        }

        if self.rng.next_float() > self.halt_threshold {
            self.halted = true;
            return Step::End;
        }

        Step::Value((self.generate)(&mut self.rng))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pullseq_rand::{FixedRandomness, ScriptedRandomness};

    #[test]
    fn test_samples_below_threshold_always_yield() {
        let mut source =
            RandomHaltSource::new(FixedRandomness(0.2), 0.75, |_: &mut FixedRandomness| "dragon");

        for _ in 0..100 {
            assert_eq!(source.advance(), Step::Value("dragon"));
        }
    }

    #[test]
    fn test_sample_above_threshold_halts_immediately() {
        let mut source =
            RandomHaltSource::new(FixedRandomness(0.9), 0.75, |_: &mut FixedRandomness| "dragon");

        assert_eq!(source.advance(), Step::End);
        assert_eq!(source.advance(), Step::End);
    }

    #[test]
    fn test_halt_is_permanent() {
        // the script would allow more items after the halting sample
        let samples = ScriptedRandomness::new([0.1, 0.9, 0.1, 0.1]);
        let mut source = RandomHaltSource::new(samples, 0.75, |_: &mut ScriptedRandomness| ());

        assert_eq!(source.advance(), Step::Value(()));
        assert_eq!(source.advance(), Step::End);
        assert_eq!(source.advance(), Step::End);
    }

    #[test]
    fn test_generator_sees_the_injected_randomness() {
        let samples = ScriptedRandomness::new([0.0, 0.5]);
        let mut source =
            RandomHaltSource::new(samples, 0.75, |rng: &mut ScriptedRandomness| rng.next_float());

        assert_eq!(source.advance(), Step::Value(0.5));
    }
}
