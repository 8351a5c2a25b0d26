// Passage table. `answer` holds indices into `phrases`; its length equals the
// kind's argument count.
use super::Passage;

macro_rules! passage {
    ($kind:literal, [$($phrase:literal),+ $(,)?], [$($ans:literal),+]) => {
        Passage { kind: $kind, phrases: &[$($phrase),+], answer: &[$($ans),+] }
    };
}

pub static PASSAGES: &[Passage] = &[
    passage!("straw", ["Jane complains about", "the way I clean.", "She must want", "to be able", "to eat off the floor"], [1, 4]),
    passage!("hominem", ["Don't listen", "to Al Gore.", "He spews", "liberal propaganda."], [3]),
    passage!("hominem", ["Rush Limbaugh", "is a pompous windbag.", "Don't listen", "to him."], [1]),
    passage!("emotion", ["All guns", "need to be banned.", "Won't anyone", "think of the children?"], [3]),
    passage!("hominem", ["People", "who don't believe", "in gay marriage", "are absolute sickos,", "and shouldn't be", "taken seriously"], [3]),
    passage!("straw", ["How could", "global warming", "exist,", "it snowed", "just yesterday?"], [1, 3]),
    passage!("straw", ["Curbing violence", "in movies", "doesn't make sense.", "Do you think", "they should just make", "movies for kids?"], [0, 5]),
    passage!("straw", ["A cruise", "would be nice", "but we can't", "spend all our money", "on vacations!"], [0, 3]),
    passage!("straw", ["Why do you", "want more shoes?", "Nobody needs", "a thousand pairs of shoes!"], [1, 3]),
    passage!("slippery", ["Once", "I eat this", "chocolate,", "I will keep eating", "and won't stop."], [1, 3]),
    passage!("authority", ["The prayer", "cured", "her rheumatism.", "She said", "it did", "and who would know better than she?"], [5]),
    passage!("hasty", ["If they", "messed up your order", "you should", "stop doing business", "with them."], [1, 3]),
    passage!("cum", ["Countries that don't eat meat", "have", "less prostate cancer.", "Therefore,", "eating meat", "leads to", "prostate cancer"], [4, 6]),
    passage!("accident", ["I saw", "a teacher with their phone", "even though", "school policy", "says", "no phones in school.", "What gives?"], [1, 5]),
    passage!("cum", ["Smokers tend", "to come from", "low income", "areas.", "What is it", "about low income", "that", "makes people smoke?"], [5, 7]),
    passage!("hasty", ["American air is so polluted.", "I saw", "this one place", "in Houston", "with so much pollution."], [0, 2]),
    passage!("post", ["After my granddad", "had his", "heart attack", "his hair turned", "completely white.", "I didn't know", "a heart attack", "could cause that."], [2, 4]),
    passage!("authority", ["Gay parents", "cannot raise", "babies correctly.", "Reverend Jacob", "says that."], [3]),
    passage!("popularity", ["Being overweight", "can't be bad.", "85% of people", "are overweight,", "as a matter", "of fact."], [2]),
    passage!("popularity", ["Yawns are", "contagious.", "Ask anyone."], [2]),
    passage!("popularity", ["Caesar was", "a great dictator.", "After all", "everyone loved him."], [3]),
    passage!("popularity", ["Donald Trump", "must be", "the worst president.", "I mean,", "just look", "at how many people", "hate him."], [5]),
    passage!("accident", ["I can", "burn tires", "in my backyard", "if I want to.", "After all,", "it's a free country."], [1, 5]),
    passage!("slippery", ["They want", "to make", "it illegal to", "hit someone with his helmet?", "What's next,", "making tackling illegal?"], [2, 5]),
    passage!("authority", ["When I", "retake this", "stupid", "physiology course,", "I'll get", "an athlete", "to teach", "it to me.", "They're bound", "to know", "it."], [5]),
    passage!("authority", ["Alicia", "doesn't think", "it would be", "illegal,", "and I", "trust her."], [0]),
    passage!("slippery", ["If something", "isn't done", "soon,", "all English people", "will", "turn Muslim."], [3, 5]),
    passage!("equivocation", ["Professor Park", "can tell you", "if you are sick.", "After all,", "he is", "a doctor."], [5]),
    passage!("composition", ["Sodium", "is toxic", "and so is", "chlorine.", "Therefore,", "I refuse", "to eat", "salt,", "which is", "made of", "the two."], [0, 3, 7]),
    passage!("affirming", ["Rich people", "buy a car", "like a Mercedes or Bentley.", "You have", "a Bentley", "therefore", "you must be rich."], [4, 6]),
    passage!("undistributed", ["All hotels", "in the Southwest chain", "have elaborate lobbies.", "The Arlington", "also has a great lobby", "therefore", "it is a Southwest hotel."], [3, 6]),
    passage!("division", ["Water", "is wet.", "Therefore,", "both hydrogen", "and oxygen", "must be wet."], [0, 3, 4]),
    passage!("denying", ["If you", "are not", "21 or older", "you cannot drink.", "You are 21", "therefore", "you can drink."], [4, 6]),
    passage!("affirming", ["If Sally", "is 21 or older", "she can legally drink.", "Sally can legally drink", "therefore", "she is 21 or older"], [3, 5]),
    passage!("denying", ["If it is legal", "for Sally to drink", "then", "she is 21 or older.", "Sally cannot legally drink", "therefore", "she is under 21."], [4, 6]),
    passage!("affirming", ["If Sally", "is 21 or older", "she can legally drink.", "Sally is not 21 or older", "therefore", "she cannot legally drink."], [3, 5]),
    passage!("affirming", ["If you", "dropped out", "of college,", "you wouldn't", "make much", "money.", "Chris doesn't make much money,", "therefore", "he dropped out."], [6, 8]),
    passage!("equivocation", ["Of course", "he couldn't", "see your point.", "Dude's blind."], [2]),
    passage!("affirming", ["When James", "gets the paper", "Mr. Fields", "gives him", "a tip.", "Yesterday,", "Mr. Fields", "gave him a tip", "so he must've", "gotten the paper."], [7, 9]),
    passage!("equivocation", ["I'll tell you", "right now", "Mr. Horace,", "no daughter", "of mine", "is going to work", "at a", "strip mall."], [7]),
];
