mod contains;
