//! Question template bank: literal question strings bucketed by subject and difficulty.
//!
//! Strings are used verbatim; nothing here is interpolated with catalog content.

use crate::domain::Difficulty;

/// One subject's buckets, indexed by difficulty.
struct SubjectBank {
  easy: [&'static str; 5],
  medium: [&'static str; 5],
  hard: [&'static str; 5],
  impossible: [&'static str; 5],
}

impl SubjectBank {
  fn bucket(&self, difficulty: Difficulty) -> &[&'static str] {
    match difficulty {
      Difficulty::Easy => &self.easy,
      Difficulty::Medium => &self.medium,
      Difficulty::Hard => &self.hard,
      Difficulty::Impossible => &self.impossible,
    }
  }
}

static MATHEMATICS: SubjectBank = SubjectBank {
  easy: [
    "What is the value of √16?",
    "If x + 5 = 12, what is x?",
    "What is 2³?",
    "Find the HCF of 12 and 18.",
    "What is the degree of polynomial 3x² + 2x + 1?",
  ],
  medium: [
    "Solve the quadratic equation x² - 5x + 6 = 0.",
    "Find the 10th term of AP: 2, 5, 8, 11, ...",
    "What is the distance between points (0,0) and (3,4)?",
    "If the discriminant of ax² + bx + c = 0 is zero, what can you conclude?",
    "Find the sum of first 20 natural numbers.",
  ],
  hard: [
    "Prove that √2 is irrational.",
    "Find the area of triangle with vertices (1,1), (2,3), (4,2).",
    "Derive the quadratic formula from ax² + bx + c = 0.",
    "If α and β are roots of x² - px + q = 0, find α² + β².",
    "Solve: |x - 2| + |x + 1| = 5",
  ],
  impossible: [
    "Find the number of solutions to sin(x) = x/10 in [0, 2π].",
    "Evaluate lim(x→0) (sin x - x)/x³.",
    "Find the coefficient of x⁵ in (1 + x + x²)¹⁰.",
    "Solve the differential equation dy/dx = y/x.",
    "Find the area enclosed by y = x² and y = 2x - x².",
  ],
};

static PHYSICS: SubjectBank = SubjectBank {
  easy: [
    "What is the unit of electric current?",
    "State Ohm's law.",
    "What happens to the image when object moves closer to a convex lens?",
    "Name the phenomenon responsible for the blue color of sky.",
    "What is the speed of light in vacuum?",
  ],
  medium: [
    "A wire of resistance 10Ω carries current 2A. Calculate the power dissipated.",
    "An object is placed 20cm from a convex lens of focal length 15cm. Find image distance.",
    "Calculate the force on a conductor of length 0.5m carrying 3A current in 0.2T magnetic field.",
    "A wave has frequency 500Hz and wavelength 0.6m. Find its speed.",
    "What is the refractive index if critical angle is 42°?",
  ],
  hard: [
    "Derive the lens formula 1/f = 1/v - 1/u.",
    "Explain the working principle of AC generator using Faraday's law.",
    "A particle moves with velocity v = 3t² + 2t. Find acceleration at t = 2s.",
    "Calculate the energy stored in a capacitor of 10μF charged to 100V.",
    "Derive the expression for magnetic field at the center of circular coil.",
  ],
  impossible: [
    "Solve Schrödinger equation for particle in a box.",
    "Calculate the binding energy of deuteron using mass-energy relation.",
    "Derive Maxwell's electromagnetic wave equation.",
    "Find the probability of tunneling through a potential barrier.",
    "Calculate the Compton shift for X-ray scattering at 90°.",
  ],
};

static CHEMISTRY: SubjectBank = SubjectBank {
  easy: [
    "What is the pH of pure water at 25°C?",
    "Name the gas evolved when zinc reacts with hydrochloric acid.",
    "What is the molecular formula of methane?",
    "Which element has atomic number 6?",
    "What color does phenolphthalein turn in basic solution?",
  ],
  medium: [
    "Calculate the pH of 0.01M HCl solution.",
    "Balance the equation: C₂H₆ + O₂ → CO₂ + H₂O",
    "How many moles are present in 22g of CO₂?",
    "What is the oxidation state of Cr in K₂Cr₂O₇?",
    "Calculate the molecular mass of Ca(OH)₂.",
  ],
  hard: [
    "Derive the relationship between Kp and Kc for the reaction N₂ + 3H₂ ⇌ 2NH₃.",
    "Explain the mechanism of SN1 reaction with example.",
    "Calculate the emf of cell: Zn|Zn²⁺||Cu²⁺|Cu given E°values.",
    "Determine the rate law for reaction A + B → C if doubling [A] doubles rate.",
    "Calculate the degree of dissociation of 0.1M CH₃COOH (Ka = 1.8×10⁻⁵).",
  ],
  impossible: [
    "Solve the Schrödinger equation for hydrogen atom to find energy levels.",
    "Derive the expression for activity coefficient using Debye-Hückel theory.",
    "Calculate the crystal field stabilization energy for [Co(NH₃)₆]³⁺.",
    "Determine the mechanism of enzyme catalysis using Michaelis-Menten kinetics.",
    "Calculate the entropy change for phase transition using statistical mechanics.",
  ],
};

static BIOLOGY: SubjectBank = SubjectBank {
  easy: [
    "What is the basic unit of life?",
    "Name the process by which plants make food.",
    "Which organ is responsible for pumping blood?",
    "What is the function of red blood cells?",
    "Name the reproductive part of a flower.",
  ],
  medium: [
    "Explain the process of cellular respiration in mitochondria.",
    "What is the difference between mitosis and meiosis?",
    "How does natural selection lead to evolution?",
    "Describe the structure and function of DNA.",
    "What happens during the light reaction of photosynthesis?",
  ],
  hard: [
    "Explain the molecular mechanism of muscle contraction.",
    "Describe the regulation of gene expression in prokaryotes.",
    "How does the immune system distinguish self from non-self?",
    "Explain the process of protein synthesis from DNA to protein.",
    "Describe the mechanism of hormone action at cellular level.",
  ],
  impossible: [
    "Analyze the epigenetic modifications in cancer development.",
    "Explain the molecular basis of memory formation in neurons.",
    "Describe the mechanism of CRISPR-Cas9 gene editing system.",
    "How do stem cells maintain pluripotency at molecular level?",
    "Explain the role of microRNAs in post-transcriptional regulation.",
  ],
};

/// Used for subjects that have catalog content but no bucket of their own.
pub const GENERIC_TEMPLATE: &str = "What is the main concept of {topic}?";

/// The literal strings for `subject` at `difficulty`, or `None` for subjects without a bank.
pub fn bucket(subject: &str, difficulty: Difficulty) -> Option<&'static [&'static str]> {
  let bank: &'static SubjectBank = match subject {
    "mathematics" => &MATHEMATICS,
    "physics" => &PHYSICS,
    "chemistry" => &CHEMISTRY,
    "biology" => &BIOLOGY,
    _ => return None,
  };
  Some(bank.bucket(difficulty))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_bucket_has_five_distinct_strings() {
    for subject in ["mathematics", "physics", "chemistry", "biology"] {
      for d in Difficulty::ALL {
        let b = bucket(subject, d).unwrap();
        assert_eq!(b.len(), 5, "{subject}/{d}");
        let mut sorted = b.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 5, "{subject}/{d} has duplicates");
      }
    }
  }

  #[test]
  fn unknown_subject_has_no_bucket() {
    assert!(bucket("geography", Difficulty::Easy).is_none());
  }

  #[test]
  fn easy_math_bucket() {
    let b = bucket("mathematics", Difficulty::Easy).unwrap();
    assert_eq!(b[0], "What is the value of √16?");
  }
}
